//! Dialog rendering helpers

pub mod common;
pub mod discipline_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;
