//! Draft form widgets: the year, brand and name inputs plus the add button

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const BRAND_PLACEHOLDER: &str = "Write the brand here";
pub const NAME_PLACEHOLDER: &str = "Write the name here";
pub const ADD_LABEL: &str = "Add Car";

/// Whether the numeric year input accepts `c` after `current`
///
/// Mirrors a number field: digits anywhere, a minus sign only first.
pub fn year_accepts(current: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '-' && current.is_empty())
}

/// Render one labelled input
///
/// An empty value shows `placeholder` dimmed. When focused the terminal
/// cursor is placed after the text.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: Option<&str>,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", label));
    let inner = block.inner(area);

    let line = match placeholder {
        Some(text) if value.is_empty() => Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        _ => Line::from(Span::styled(value, Style::default().fg(Color::White))),
    };

    // Keep the end of long values visible
    let width = value.width() as u16;
    let scroll = width.saturating_sub(inner.width.saturating_sub(1));
    let paragraph = Paragraph::new(line).block(block).scroll((0, scroll));
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (width - scroll).min(inner.width - 1);
        frame.set_cursor_position((x, inner.y));
    }
}

/// Render the add button
pub fn render_add_button(frame: &mut Frame, area: Rect, focused: bool) {
    let (border_color, label_style) = if focused {
        (
            Color::Green,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Color::DarkGray,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };

    let button = Paragraph::new(Line::from(Span::styled(ADD_LABEL, label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_accepts_digits_and_leading_minus() {
        assert!(year_accepts("", '1'));
        assert!(year_accepts("19", '9'));
        assert!(year_accepts("", '-'));
        assert!(!year_accepts("19", '-'));
        assert!(!year_accepts("19", 'a'));
        assert!(!year_accepts("", ' '));
    }
}
