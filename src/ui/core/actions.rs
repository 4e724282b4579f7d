use crate::constants::{
    CONFIRM_DELETE_SELECTED_TAG, DIALOG_TITLE_DELETE_TAG, DIALOG_TITLE_DELETE_TAGS, SUCCESS_TAG_DELETED,
};
use crate::discipline::Discipline;

/// A deletion waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDeletion {
    /// Every row whose full tag matches
    Tag(String),
    /// Every row in the discipline
    Discipline(Discipline),
}

impl PendingDeletion {
    /// Question shown in the confirmation dialog
    pub fn confirmation_message(&self) -> String {
        match self {
            PendingDeletion::Tag(_) => CONFIRM_DELETE_SELECTED_TAG.to_string(),
            PendingDeletion::Discipline(discipline) => {
                format!("Are you sure you want to delete ALL tags in {} discipline?", discipline)
            }
        }
    }

    /// Title of the dialogs reporting on this deletion
    pub fn title(&self) -> &'static str {
        match self {
            PendingDeletion::Tag(_) => DIALOG_TITLE_DELETE_TAG,
            PendingDeletion::Discipline(_) => DIALOG_TITLE_DELETE_TAGS,
        }
    }

    /// Message reported once the deletion removed `deleted` rows
    pub fn success_message(&self, deleted: u64) -> String {
        match self {
            PendingDeletion::Tag(_) => SUCCESS_TAG_DELETED.to_string(),
            PendingDeletion::Discipline(discipline) => {
                format!("Deleted {} tags in {} discipline", deleted, discipline)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Tag operations
    DeleteSelectedTag,
    PromptDisciplineDeletion,
    SubmitDiscipline(String),
    ConfirmDeletion(PendingDeletion),
    RefreshTags,

    // UI operations
    OpenContextMenu { column: u16, row: u16 },
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Warning(String),
    Confirmation { message: String, pending: PendingDeletion },
    DisciplinePrompt,
    Info { title: &'static str, message: String },
    Error(String),
    Help,
    Logs,
}
