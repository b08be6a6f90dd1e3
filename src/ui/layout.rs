use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub list_area: Rect,
    pub tomorrow_area: Rect,
    pub history_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header: title and theme toggle (1 row)
/// - Task list (60%)
/// - Bottom: Tomorrow (50%) | History (50%)
/// - Keybindings bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Header
            Constraint::Percentage(60), // Task list
            Constraint::Min(0),         // Derived views
            Constraint::Length(1),      // Keybindings bar
        ])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    MainLayout {
        header_area: rows[0],
        list_area: rows[1],
        tomorrow_area: bottom[0],
        history_area: bottom[1],
        keybindings_area: rows[3],
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);
        assert!(layout.list_area.height > layout.tomorrow_area.height);
        assert!(layout.tomorrow_area.height > 0);
        assert_eq!(layout.tomorrow_area.height, layout.history_area.height);
        assert_eq!(layout.tomorrow_area.width + layout.history_area.width, 100);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 12);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 12);
    }
}
