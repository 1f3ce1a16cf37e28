//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `EditorState` - the car list and the draft form values
//! - `Focus` - which control receives input
//! - `ModalStack` - Modal overlay management

pub mod car;
pub mod editor;
pub mod modal;
pub mod ui;

// Re-export commonly used types
pub use car::{CarId, CarList};
#[cfg(test)]
pub use editor::FixedClock;
pub use editor::{Clock, EditorState, SystemClock};
pub use ui::Focus;
