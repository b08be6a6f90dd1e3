use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{base_style, modal_title_style, muted_style, Palette},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the front alarm reminder
pub fn render_alert_modal(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let Some(message) = app.alerts.front() else {
        return;
    };

    let modal_area = create_modal_area(area, 8);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::raw(""),
        Line::styled(format!("  {}", message), modal_title_style(p)),
        Line::raw(""),
    ];

    let waiting = app.alerts.len() - 1;
    if waiting > 0 {
        lines.push(Line::styled(
            format!("  {} more reminder(s) waiting", waiting),
            muted_style(p),
        ));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style(p)),
        Span::raw(" Dismiss"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ⏰ Reminder ", modal_title_style(p)))
                .style(base_style(p)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
