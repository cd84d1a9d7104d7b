use crate::features::prompts::models::{Prompt, PromptFields, PromptId};

use super::delete_confirmation::DeleteConfirmation;
use super::editor::{EditorMode, RecordEditor};
use super::list_sync::PromptList;

/// Everything a renderer needs for the create/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorView {
    pub mode: EditorMode,
    pub draft: PromptFields,
    pub submitting: bool,
    pub error: Option<String>,
    pub title: Option<&'static str>,
    pub submit_label: Option<&'static str>,
    /// Escape and outside clicks are ignored while false
    pub dismissible: bool,
}

impl From<&RecordEditor> for EditorView {
    fn from(editor: &RecordEditor) -> Self {
        Self {
            mode: editor.mode(),
            draft: editor.draft().clone(),
            submitting: editor.is_submitting(),
            error: editor.error().map(str::to_string),
            title: editor.title(),
            submit_label: editor.submit_label(),
            dismissible: !editor.is_submitting(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteView {
    pub target: Option<PromptId>,
    pub target_name: Option<String>,
    pub deleting: bool,
    pub error: Option<String>,
    pub confirm_label: &'static str,
    pub dismissible: bool,
}

impl DeleteView {
    pub fn new(deletion: &DeleteConfirmation, list: &PromptList) -> Self {
        Self {
            target: deletion.target(),
            target_name: deletion.target_name(list),
            deleting: deletion.is_deleting(),
            error: deletion.error().map(str::to_string),
            confirm_label: deletion.confirm_label(),
            dismissible: !deletion.is_deleting(),
        }
    }
}

/// Snapshot published after every workspace transition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceView {
    pub prompts: Vec<Prompt>,
    /// True until the initial list arrives (placeholder grid)
    pub loading: bool,
    pub load_error: Option<String>,
    pub editor: EditorView,
    pub deletion: DeleteView,
    pub copied_id: Option<PromptId>,
}
