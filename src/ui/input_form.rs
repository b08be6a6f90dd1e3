use crate::app::AppState;
use crate::domain::FormField;
use crate::ui::{
    layout::create_modal_area,
    styles::{base_style, error_style, modal_title_style, muted_style, Palette},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };

    let modal_area = create_modal_area(area, 13);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let field_line = |value: &str, field: FormField| {
        let mut spans = vec![
            Span::raw("> "),
            Span::styled(value.to_string(), modal_title_style(p)),
        ];
        if form.editing_field == field {
            spans.push(Span::styled("█", modal_title_style(p))); // Cursor
        }
        Line::from(spans)
    };

    let mut lines = vec![
        Line::raw(""),
        Line::raw("Task:"),
        field_line(&form.text, FormField::Text),
        Line::raw(""),
        Line::raw("Alarm (optional):"),
        field_line(&form.alarm, FormField::Alarm),
        Line::styled("  YYYY-MM-DD HH:MM, or HH:MM for today", muted_style(p)),
        Line::raw(""),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::styled(error.clone(), error_style(p)));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to cancel"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add Task ", modal_title_style(p)))
                .style(base_style(p)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
