use crate::domain::UiMode;
use crate::ui::styles::{muted_style, Palette};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

fn hints(mode: UiMode) -> &'static str {
    match mode {
        UiMode::Normal => {
            " ↑/↓ select   Enter/Space done   a add   x delete   t theme   q quit"
        }
        UiMode::AddingTask => " Tab switch field   Enter add   Esc cancel",
        UiMode::Alert => " Enter/Esc dismiss",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, p: &Palette, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(mode))).style(muted_style(p));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_mode() {
        assert!(hints(UiMode::Normal).contains("a add"));
        assert!(hints(UiMode::AddingTask).contains("Esc cancel"));
        assert!(hints(UiMode::Alert).contains("dismiss"));
    }
}
