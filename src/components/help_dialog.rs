//! Help dialog listing the key bindings

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// (section, [(keys, description)])
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Form",
        &[
            ("Tab / Shift+Tab", "Next / previous control"),
            ("↑ / ↓", "Previous / next control"),
            ("Enter", "Add the car"),
            ("Backspace", "Delete last character"),
            ("Ctrl+U", "Clear the field"),
        ],
    ),
    (
        "List",
        &[
            ("↑↓ / j k", "Move highlight"),
            ("Home End / g G", "First / last entry"),
            ("Enter Del x d", "Remove highlighted car"),
            ("Click", "Remove the clicked car"),
            ("q", "Quit"),
        ],
    ),
    (
        "General",
        &[
            ("F1 / ?", "This help"),
            ("Esc / Ctrl+C", "Quit"),
        ],
    ),
];

/// Key binding reference overlay
///
/// Owns its scroll position; the modal stack only records that it is open.
#[derive(Debug, Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    fn lines() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (section, bindings) in BINDINGS {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                *section,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<18}", keys),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(*description),
                ]));
            }
        }
        lines
    }

    /// Highest useful scroll offset
    pub fn max_scroll() -> usize {
        Self::lines().len().saturating_sub(1)
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1) => {
                Some(Action::CloseModal)
            }
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ModalUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ModalDown),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::OpenHelp => self.scroll_offset = 0,
            Action::ModalUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            Action::ModalDown => {
                self.scroll_offset = (self.scroll_offset + 1).min(Self::max_scroll());
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, 22);
        frame.render_widget(Clear, popup_area);

        let offset = self.scroll_offset.min(Self::max_scroll()) as u16;
        let paragraph = Paragraph::new(Self::lines())
            .scroll((offset, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Help ")
                    .title_bottom(Line::styled(
                        " Esc close  ↑↓ scroll ",
                        Style::default().fg(Color::DarkGray),
                    )),
            );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
