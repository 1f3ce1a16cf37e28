//! Car list rendering
//!
//! Entries are shown as `{year}-{brand}-{name}` in insertion order.

use crate::model::CarList;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the list into `area`, updating the scroll offset in `list_state`
pub fn render_car_list(
    frame: &mut Frame,
    area: Rect,
    cars: &CarList,
    list_state: &mut ListState,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Cars ({}) ", cars.len()));

    if cars.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No cars yet. Fill in the form below and press Enter.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = cars
        .iter()
        .map(|car| ListItem::new(Line::from(car.display_text())))
        .collect();

    let highlight = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Map a click at `row` to the list position it lands on
///
/// `area` is the outer (bordered) list area from the last render and
/// `offset` the list's scroll offset at that time.
pub fn row_to_index(area: Rect, offset: usize, row: u16, len: usize) -> Option<usize> {
    let inner_top = area.y + 1;
    let inner_bottom = area.bottom().saturating_sub(1);
    if row < inner_top || row >= inner_bottom {
        return None;
    }
    let index = offset + usize::from(row - inner_top);
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_index_skips_borders() {
        let area = Rect::new(0, 3, 40, 6);
        assert_eq!(row_to_index(area, 0, 3, 10), None);
        assert_eq!(row_to_index(area, 0, 4, 10), Some(0));
        assert_eq!(row_to_index(area, 0, 7, 10), Some(3));
        assert_eq!(row_to_index(area, 0, 8, 10), None);
    }

    #[test]
    fn test_row_to_index_applies_offset_and_length() {
        let area = Rect::new(0, 0, 40, 6);
        assert_eq!(row_to_index(area, 5, 1, 10), Some(5));
        assert_eq!(row_to_index(area, 0, 3, 2), None);
    }
}
