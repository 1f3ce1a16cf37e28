//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod car_list;
pub mod draft_form;
pub mod editor;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;

pub use editor::CarListEditor;
pub use help_dialog::HelpDialog;
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
