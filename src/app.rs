//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes events to the editor or to the top overlay. It owns no car
//! data itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{CarListEditor, HelpDialog, QuitDialog};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Main application state - coordinates between components
pub struct App {
    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub editor: CarListEditor,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(config: Config) -> App {
        Self::with_editor(config, CarListEditor::new())
    }

    pub fn with_editor(config: Config, editor: CarListEditor) -> App {
        App {
            modals: ModalStack::new(),
            should_quit: false,
            config,
            editor,
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Process an action and every follow-up it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(action) = current {
            if action != Action::Tick {
                tracing::trace!(%action, "dispatch");
            }
            current = self.update(action)?;
        }
        Ok(())
    }

    fn open_modal(&mut self, modal: Modal) {
        if !self.modals.contains(&modal) {
            self.modals.push(modal);
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.editor.init()?;
        tracing::info!(
            confirm_quit = self.config.confirm_quit,
            mouse = self.config.mouse,
            "car list editor ready"
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => self.editor.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.editor.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(..) => {}

            Action::Quit => {
                return Ok(Some(if self.config.confirm_quit {
                    Action::OpenQuitDialog
                } else {
                    Action::ForceQuit
                }));
            }
            Action::ForceQuit => {
                tracing::info!(cars = self.editor.state().cars.len(), "quitting");
                self.should_quit = true;
            }

            Action::OpenQuitDialog => self.open_modal(Modal::QuitConfirm),
            Action::OpenHelp => {
                if !self.modals.contains(&Modal::Help) {
                    self.help_dialog.update(Action::OpenHelp)?;
                    self.open_modal(Modal::Help);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {
                if self.modals.top() == Some(&Modal::Help) {
                    return self.help_dialog.update(action);
                }
            }

            // Everything else belongs to the editor
            other => return self.editor.update(other),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.editor.draw(frame, area)?;
        self.quit_dialog.unsaved = self.editor.state().cars.len();

        for modal in self.modals.iter() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}
