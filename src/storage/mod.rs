//! Local storage module for the tag database
//!
//! This module owns the SQLite connection (via SeaORM) and exposes the tag
//! operations the UI needs:
//! - Listing tags
//! - Deleting by full tag or by discipline
//! - Per-discipline counts for the completeness chart

pub mod db;
pub mod tags;

pub use db::{StoreError, TagStore};
