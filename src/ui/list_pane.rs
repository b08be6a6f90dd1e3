use crate::app::AppState;
use crate::domain::{alarm_label, done_marker, Task};
use crate::ui::styles::{
    border_style, done_marker_style, done_style, muted_style, selected_style, title_style, Palette,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the main task list
pub fn render_list_pane(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let items: Vec<ListItem> = if app.tasks().is_empty() {
        vec![ListItem::new(Line::styled(
            "No tasks yet. Press a to add one.",
            muted_style(p),
        ))]
    } else {
        app.tasks()
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let line = create_task_line(task, p);
                if idx == app.selected_index {
                    ListItem::new(line).style(selected_style(p))
                } else {
                    ListItem::new(line)
                }
            })
            .collect()
    };

    let pending = app.tasks().iter().filter(|t| !t.done).count();
    let title = format!(" Tasks ({} open / {}) ", pending, app.tasks().len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(p))
            .title(Span::styled(title, title_style(p))),
    );

    f.render_widget(list, area);
}

/// Format: [x] Buy milk   ⏰ 02 Jan 09:00 AM
fn create_task_line(task: &Task, p: &Palette) -> Line<'static> {
    let mut spans = Vec::new();

    let marker_style = if task.done {
        done_marker_style(p)
    } else {
        Style::default()
    };
    spans.push(Span::styled(format!("{} ", done_marker(task)), marker_style));

    let text_style = if task.done {
        done_style(p)
    } else {
        Style::default()
    };
    spans.push(Span::styled(task.text.clone(), text_style));

    if let Some(time) = task.time {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!("⏰ {}", alarm_label(time)), muted_style(p)));
    }

    Line::from(spans)
}
