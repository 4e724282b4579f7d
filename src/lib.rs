//! Tagdesk - A Terminal User Interface (TUI) for engineering tag lists
//!
//! This library provides a terminal-based interface for reviewing and pruning
//! engineering tags (instrument and equipment identifiers grouped by
//! discipline) kept in a local SQLite database. It includes the tag store,
//! the delete workflows, a per-discipline completeness chart, and a rich
//! interactive UI built with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`discipline`] - The closed set of engineering disciplines
//! * [`storage`] - Tag database ownership and queries
//! * [`ui`] - Terminal user interface components

/// Command line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants, dialog text and default values
pub mod constants;

/// Engineering disciplines and per-discipline tag counts
pub mod discipline;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Tag store owning the database connection
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

pub use discipline::{Discipline, DisciplineCounts};
pub use entities::tag;
