//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
#[derive(Debug, Default)]
pub struct QuitDialog {
    /// Cars in the editor; none of them survive the quit
    pub unsaved: usize,
}

impl QuitDialog {
    fn warning(&self) -> String {
        match self.unsaved {
            0 => "The list is empty.".to_string(),
            1 => "1 car will be lost.".to_string(),
            n => format!("{} cars will be lost.", n),
        }
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 40, 8);

        frame.render_widget(Clear, popup_area);

        let warning_color = if self.unsaved == 0 {
            Color::Gray
        } else {
            Color::Red
        };
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Quit the car list editor?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::styled(self.warning(), Style::default().fg(warning_color)),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Yes, quit  "),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("No, cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit? ")
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_quit_dialog_keys() {
        let mut dialog = QuitDialog::default();
        let press = |dialog: &mut QuitDialog, code| {
            dialog
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap()
        };

        assert_eq!(press(&mut dialog, KeyCode::Char('y')), Some(Action::ForceQuit));
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(&mut dialog, KeyCode::Char('a')), None);
    }

    #[test]
    fn test_warning_counts_unsaved_cars() {
        let warning = |unsaved| QuitDialog { unsaved }.warning();
        assert_eq!(warning(0), "The list is empty.");
        assert_eq!(warning(1), "1 car will be lost.");
        assert_eq!(warning(12), "12 cars will be lost.");
    }

    #[test]
    fn test_draw_shows_warning() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut dialog = QuitDialog { unsaved: 3 };
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                dialog.draw(frame, area).unwrap();
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("3 cars will be lost."));
        assert!(text.contains("Yes, quit"));
    }
}
