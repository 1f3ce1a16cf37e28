//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Editor screen areas, recorded at draw time for mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub title: Rect,
    pub list: Rect,
    pub year: Rect,
    pub brand: Rect,
    pub name: Rect,
    pub add_button: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Whether the cell at (`column`, `row`) lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Calculate the editor layout
///
/// Title on top, the car list filling the middle, then one row holding the
/// three inputs and the add button, and the help bar at the bottom.
pub fn calculate_editor_layout(area: Rect) -> EditorLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // List
            Constraint::Length(3), // Form
            Constraint::Length(3), // Help
        ])
        .split(area);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(11),
        ])
        .split(rows[2]);

    EditorLayout {
        title: rows[0],
        list: rows[1],
        year: form[0],
        brand: form[1],
        name: form[2],
        add_button: form[3],
        help: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));

        let small = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(small, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_editor_layout_stacks_vertically() {
        let layout = calculate_editor_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.height, 3);
        assert_eq!(layout.list.y, 3);
        assert_eq!(layout.list.height, 15);
        assert_eq!(layout.year.y, 18);
        assert_eq!(layout.help.y, 21);
        assert_eq!(layout.year.width, 12);
        assert_eq!(layout.add_button.width, 11);
        assert_eq!(layout.add_button.right(), 80);
    }

    #[test]
    fn test_contains() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(contains(area, 2, 3));
        assert!(contains(area, 5, 4));
        assert!(!contains(area, 6, 4));
        assert!(!contains(area, 2, 5));
    }
}
