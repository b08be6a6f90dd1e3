mod alarm;
mod app;
mod clock;
mod config;
mod domain;
mod input;
mod notifications;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{ArgAction, Parser, Subcommand};
use clock::ZoneClock;
use config::{default_config_path, init_config, load_config, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notifications::TerminalNotifier;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// How often the UI redraws and checks the alarm poller
const FRAME_TICK: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "nudge", version)]
#[command(about = "A terminal todo list with alarm reminders", long_about = None)]
struct Cli {
    /// Config file. Defaults to <config dir>/nudge/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// IANA time zone for alarms, e.g. Europe/Madrid, or "local"
    #[arg(long, env = "NUDGE_TIMEZONE")]
    timezone: Option<String>,

    /// Seconds between alarm checks
    #[arg(long)]
    interval: Option<u64>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    match cli.command {
        Some(Commands::Init) => {
            init_config(&config_path)?;
            println!("Wrote default config: {}", config_path.display());
            Ok(())
        }
        None => {
            let mut config = load_config(&config_path)?.with_timezone(cli.timezone.clone());
            if let Some(secs) = cli.interval {
                config.poll_interval_secs = secs;
            }
            if cli.dark {
                config.dark_mode = true;
            }

            init_tracing(&config.log_file_path()?, cli.verbose)?;
            info!(config = %config_path.display(), "starting nudge");

            run_tui(&config)
        }
    }
}

/// Send tracing output to a log file; the terminal belongs to the UI
fn init_tracing(log_file: &Path, verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid RUST_LOG filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}

fn run_tui(config: &Config) -> Result<()> {
    let settings = config.resolve()?;
    info!(
        zone = %settings.zone,
        interval_secs = settings.poll_interval.as_secs(),
        "settings resolved"
    );

    let clock = ZoneClock::new(settings.zone);
    let notifier = TerminalNotifier::new(settings.bell, settings.desktop_notifications);
    let mut app = AppState::new(&settings, Box::new(clock), Box::new(notifier));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.activate(Instant::now());

    // Run app
    let result = run_app(&mut terminal, &mut app);

    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
    }
    info!(tasks = app.tasks().len(), "exiting; tasks are not kept between sessions");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(FRAME_TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.check_alarms(Instant::now());
    }
}
