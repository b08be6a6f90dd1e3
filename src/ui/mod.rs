pub mod derived_panes;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use derived_panes::{render_history_pane, render_tomorrow_pane};
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_alert_modal;
use ratatui::{widgets::Block, Frame};
use styles::{base_style, palette};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let p = palette(app.theme());
    let layout = create_layout(size);

    // Theme background for the whole screen
    f.render_widget(Block::default().style(base_style(p)), size);

    render_header(f, app, p, layout.header_area);
    render_list_pane(f, app, p, layout.list_area);
    render_tomorrow_pane(f, app, p, layout.tomorrow_area);
    render_history_pane(f, app, p, layout.history_area);
    render_keybindings(f, app.ui_mode, p, layout.keybindings_area);

    if app.input_form.is_some() {
        render_input_form(f, app, p, size);
    }

    // Reminders draw over everything, including the form
    if app.ui_mode == UiMode::Alert {
        render_alert_modal(f, app, p, size);
    }
}
