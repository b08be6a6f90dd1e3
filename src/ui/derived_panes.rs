use crate::app::AppState;
use crate::domain::alarm_clock_label;
use crate::ui::styles::{border_style, done_style, muted_style, title_style, tomorrow_style, Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render pending tasks scheduled for tomorrow
pub fn render_tomorrow_pane(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let tasks = app.tomorrow_tasks();

    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![placeholder("No tasks scheduled for tomorrow.", p)]
    } else {
        tasks
            .iter()
            .map(|task| {
                let mut spans = vec![Span::raw(task.text.clone())];
                if let Some(time) = task.time {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        format!("⏰ {}", alarm_clock_label(time)),
                        tomorrow_style(p),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    f.render_widget(pane(items, " 📅 Tasks for Tomorrow ", p), area);
}

/// Render tasks completed that were scheduled for yesterday
pub fn render_history_pane(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let tasks = app.yesterday_tasks();

    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![placeholder("No tasks completed yesterday.", p)]
    } else {
        tasks
            .iter()
            .map(|task| {
                ListItem::new(Line::from(vec![
                    Span::styled(task.text.clone(), done_style(p)),
                    Span::raw("  "),
                    Span::styled("✅ Completed", muted_style(p)),
                ]))
            })
            .collect()
    };

    f.render_widget(pane(items, " 📜 History (Completed Yesterday) ", p), area);
}

fn placeholder(text: &'static str, p: &Palette) -> ListItem<'static> {
    ListItem::new(Line::styled(text, muted_style(p)))
}

fn pane<'a>(items: Vec<ListItem<'a>>, title: &'static str, p: &Palette) -> List<'a> {
    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(p))
            .title(Span::styled(title, title_style(p))),
    )
}
