use crate::app::AppState;
use crate::ui::styles::{muted_style, title_style, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the title bar with the current time and theme toggle label
pub fn render_header(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let now = app.clock.now().format("%a %d %b %H:%M");
    let title = Line::from(vec![
        Span::styled(" 🎯 Nudge Todo List ", title_style(p)),
        Span::styled(format!(" {}", now), muted_style(p)),
    ]);
    f.render_widget(Paragraph::new(title), halves[0]);

    let toggle = Line::from(vec![
        Span::styled("[t] ", muted_style(p)),
        Span::raw(app.theme().toggle_label()),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), halves[1]);
}
