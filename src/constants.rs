//! Constants used throughout the application
//!
//! This module centralizes dialog text, labels, and other constant values
//! to improve maintainability and consistency.

// Dialog titles
pub const DIALOG_TITLE_DELETE_TAG: &str = "Delete Tag";
pub const DIALOG_TITLE_DELETE_TAGS: &str = "Delete Tags";
pub const DIALOG_TITLE_CONFIRM_DELETION: &str = "Confirm Deletion";
pub const DIALOG_TITLE_ERROR: &str = "Error";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc', '?' or 'h' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Prompts
pub const WARNING_SELECT_TAG: &str = "Please select a tag to delete";
pub const CONFIRM_DELETE_SELECTED_TAG: &str = "Are you sure you want to delete the selected tag?";
pub const PROMPT_DISCIPLINE: &str = "Enter discipline to delete tags:";

// Success Messages
pub const SUCCESS_TAG_DELETED: &str = "Tag deleted successfully";

// Error Messages
pub const ERROR_TAG_DELETE_FAILED: &str = "Failed to delete tag";
pub const ERROR_DISCIPLINE_DELETE_FAILED: &str = "Failed to delete tags";
pub const ERROR_LOAD_FAILED: &str = "Failed to load tags";

// UI labels
pub const APP_TITLE: &str = "Tag Management";
pub const LIST_COLUMN_DISCIPLINE: &str = "Discipline";
pub const LIST_COLUMN_TAG: &str = "Tag";
pub const BUTTON_DELETE_SELECTED: &str = "Delete Selected Tag";
pub const BUTTON_DELETE_BY_DISCIPLINE: &str = "Delete by Discipline";
pub const CONTEXT_MENU_DELETE_TAG: &str = "Delete Tag";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Storage defaults
pub const DEFAULT_DATABASE_PATH: &str = "tags_database.db";
pub const CONFIG_FILE_NAME: &str = "tagdesk.toml";
pub const APP_DIR_NAME: &str = "tagdesk";
pub const LOG_FILE_NAME: &str = "tagdesk.log";

/// Maximum number of entries kept by the in-memory logger
pub const LOG_BUFFER_CAPACITY: usize = 1000;

// UI Layout Constants
/// Minimum chart width as a percentage of the screen
pub const CHART_MIN_WIDTH_PERCENT: u16 = 20;
/// Maximum chart width as a percentage of the screen
pub const CHART_MAX_WIDTH_PERCENT: u16 = 70;
/// Default chart width as a percentage of the screen
pub const CHART_DEFAULT_WIDTH_PERCENT: u16 = 40;
/// Height of the button bar in lines
pub const BUTTON_BAR_HEIGHT: u16 = 3;
