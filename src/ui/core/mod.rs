//! Core UI functionality for the Tagdesk application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event polling, actions, and the component abstraction.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and dialog types
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard/mouse input polling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe what the user asked for; components consume the UI
//!    ones and the app component runs the tag operations
//! 3. **Events** are read through the [`EventHandler`]

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, PendingDeletion};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
