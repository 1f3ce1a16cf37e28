//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{CarId, Focus};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick when no event arrived
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit, asking first when confirmation is enabled
    Quit,
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus & Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,
    /// Move focus to a specific control
    SetFocus(Focus),
    /// Highlight next list entry
    NextItem,
    /// Highlight previous list entry
    PrevItem,
    /// Highlight first list entry
    FirstItem,
    /// Highlight last list entry
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Car List
    // ─────────────────────────────────────────────────────────────────────────
    /// Commit the draft as a new car
    AddCar,
    /// Remove the car at this position of the last render
    RemoveCar(usize),
    /// Remove the car with this id, wherever it sits now
    RemoveCarById(CarId),
    /// Remove the highlighted car
    RemoveSelected,

    // ─────────────────────────────────────────────────────────────────────────
    // Draft Inputs
    // ─────────────────────────────────────────────────────────────────────────
    /// Replace the draft year text
    ChangeYear(String),
    /// Replace the draft brand
    ChangeBrand(String),
    /// Replace the draft name
    ChangeName(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Scroll the current modal up
    ModalUp,
    /// Scroll the current modal down
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::SetFocus(focus) => write!(f, "SetFocus({:?})", focus),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::AddCar => write!(f, "AddCar"),
            Action::RemoveCar(index) => write!(f, "RemoveCar({})", index),
            Action::RemoveCarById(id) => write!(f, "RemoveCarById({})", id),
            Action::RemoveSelected => write!(f, "RemoveSelected"),
            Action::ChangeYear(value) => write!(f, "ChangeYear({:?})", value),
            Action::ChangeBrand(value) => write!(f, "ChangeBrand({:?})", value),
            Action::ChangeName(value) => write!(f, "ChangeName({:?})", value),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_payload() {
        assert_eq!(Action::RemoveCar(2).to_string(), "RemoveCar(2)");
        assert_eq!(
            Action::ChangeBrand("Ford".to_string()).to_string(),
            "ChangeBrand(\"Ford\")"
        );
        assert_eq!(Action::SetFocus(Focus::List).to_string(), "SetFocus(List)");
    }
}
