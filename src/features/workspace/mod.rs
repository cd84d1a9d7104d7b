//! Page-local prompt workspace: the displayed list, the create/edit
//! dialog, the delete confirmation dialog and the copy indicator.
//!
//! Every mutation follows the confirmed-write model: local state changes
//! only after the Prompt Service reports success.

pub mod clipboard;
pub mod delete_confirmation;
pub mod editor;
pub mod list_sync;
pub mod session;
pub mod view;

use thiserror::Error;

use crate::core::error::AppError;
use crate::features::prompts::models::PromptId;

pub use clipboard::{Clipboard, ClipboardError, CopyIndicator, MemoryClipboard, COPY_FEEDBACK_WINDOW};
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use delete_confirmation::{DeleteConfirmation, DeleteOutcome};
pub use editor::{DraftField, EditorMode, EditorOutcome, RecordEditor, Submission};
pub use list_sync::PromptList;
pub use session::PromptWorkspace;
pub use view::{DeleteView, EditorView, WorkspaceView};

/// A state machine was asked for a transition its current state forbids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("no dialog is open")]
    NotOpen,

    #[error("a dialog is already open")]
    AlreadyOpen,

    #[error("an operation is already in flight")]
    Busy,

    #[error("no operation is in flight")]
    NotInFlight,

    #[error("no prompt is selected for deletion")]
    NoTarget,

    #[error("prompt {0} is not in the list")]
    UnknownPrompt(PromptId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Service(#[from] AppError),
}
