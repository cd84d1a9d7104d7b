use crate::core::error::AppError;
use crate::features::prompts::models::{Prompt, PromptFields, PromptId};

use super::TransitionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(PromptId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Content,
}

/// What the workspace should send to the Prompt Service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(PromptFields),
    Update(PromptId, PromptFields),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Created(Prompt),
    Updated(Prompt),
    /// The editor stayed open with the error recorded
    Failed(AppError),
}

/// Create/edit dialog state.
///
/// While `submitting` is set the draft is frozen and the dialog cannot be
/// cancelled or dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordEditor {
    mode: EditorMode,
    draft: PromptFields,
    submitting: bool,
    error: Option<String>,
}

impl RecordEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &PromptFields {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open_create(&mut self) -> Result<(), TransitionError> {
        self.ensure_closed()?;
        self.mode = EditorMode::Creating;
        self.draft = PromptFields::default();
        self.error = None;
        Ok(())
    }

    pub fn open_edit(&mut self, prompt: &Prompt) -> Result<(), TransitionError> {
        self.ensure_closed()?;
        self.mode = EditorMode::Editing(prompt.id);
        self.draft = prompt.fields();
        self.error = None;
        Ok(())
    }

    /// Replace exactly one draft field
    pub fn set_field(&mut self, field: DraftField, value: String) -> Result<(), TransitionError> {
        self.ensure_open()?;
        self.ensure_idle()?;
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Description => self.draft.description = value,
            DraftField::Content => self.draft.content = value,
        }
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<Submission, TransitionError> {
        self.ensure_idle()?;
        let submission = match self.mode {
            EditorMode::Closed => return Err(TransitionError::NotOpen),
            EditorMode::Creating => Submission::Create(self.draft.clone()),
            EditorMode::Editing(id) => Submission::Update(id, self.draft.clone()),
        };
        self.submitting = true;
        self.error = None;
        Ok(submission)
    }

    /// Apply the settled service call
    pub fn finish_submit(
        &mut self,
        result: Result<Prompt, AppError>,
    ) -> Result<EditorOutcome, TransitionError> {
        if !self.submitting {
            return Err(TransitionError::NotInFlight);
        }
        self.submitting = false;

        match result {
            Ok(prompt) => {
                let outcome = match self.mode {
                    EditorMode::Editing(_) => EditorOutcome::Updated(prompt),
                    _ => EditorOutcome::Created(prompt),
                };
                self.reset();
                Ok(outcome)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Ok(EditorOutcome::Failed(err))
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        self.ensure_open()?;
        self.ensure_idle()?;
        self.reset();
        Ok(())
    }

    /// Escape key or click outside the dialog. Suppressed while submitting.
    pub fn request_dismiss(&mut self) -> bool {
        self.cancel().is_ok()
    }

    pub fn title(&self) -> Option<&'static str> {
        match self.mode {
            EditorMode::Closed => None,
            EditorMode::Creating => Some("Create New Prompt"),
            EditorMode::Editing(_) => Some("Edit Prompt"),
        }
    }

    pub fn submit_label(&self) -> Option<&'static str> {
        match (self.mode, self.submitting) {
            (EditorMode::Closed, _) => None,
            (EditorMode::Creating, false) => Some("Create Prompt"),
            (EditorMode::Creating, true) => Some("Creating..."),
            (EditorMode::Editing(_), false) => Some("Save Changes"),
            (EditorMode::Editing(_), true) => Some("Saving..."),
        }
    }

    fn reset(&mut self) {
        self.mode = EditorMode::Closed;
        self.draft = PromptFields::default();
        self.error = None;
        self.submitting = false;
    }

    fn ensure_closed(&self) -> Result<(), TransitionError> {
        if self.is_open() {
            return Err(TransitionError::AlreadyOpen);
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), TransitionError> {
        if !self.is_open() {
            return Err(TransitionError::NotOpen);
        }
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), TransitionError> {
        if self.submitting {
            return Err(TransitionError::Busy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::prompt;

    fn editing(id: i64) -> RecordEditor {
        let mut editor = RecordEditor::new();
        editor.open_edit(&prompt(id, "Original")).unwrap();
        editor
    }

    #[test]
    fn test_open_create_starts_with_empty_draft() {
        let mut editor = RecordEditor::new();
        editor.open_create().unwrap();

        assert_eq!(editor.mode(), EditorMode::Creating);
        assert_eq!(editor.draft(), &PromptFields::default());
        assert_eq!(editor.title(), Some("Create New Prompt"));
        assert_eq!(editor.submit_label(), Some("Create Prompt"));
    }

    #[test]
    fn test_open_edit_copies_prompt_fields() {
        let editor = editing(5);

        assert_eq!(editor.mode(), EditorMode::Editing(PromptId(5)));
        assert_eq!(editor.draft(), &prompt(5, "Original").fields());
        assert_eq!(editor.title(), Some("Edit Prompt"));
    }

    #[test]
    fn test_cannot_open_twice() {
        let mut editor = editing(5);
        assert_eq!(editor.open_create(), Err(TransitionError::AlreadyOpen));
        assert_eq!(editor.mode(), EditorMode::Editing(PromptId(5)));
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let mut editor = editing(5);
        let before = editor.draft().clone();

        editor
            .set_field(DraftField::Description, "new".to_string())
            .unwrap();

        assert_eq!(editor.draft().description, "new");
        assert_eq!(editor.draft().name, before.name);
        assert_eq!(editor.draft().content, before.content);
    }

    #[test]
    fn test_set_field_rejected_when_closed() {
        let mut editor = RecordEditor::new();
        assert_eq!(
            editor.set_field(DraftField::Name, "x".to_string()),
            Err(TransitionError::NotOpen)
        );
    }

    #[test]
    fn test_submit_success_closes_and_reports_created() {
        let mut editor = RecordEditor::new();
        editor.open_create().unwrap();
        editor.set_field(DraftField::Name, "B".to_string()).unwrap();

        let submission = editor.begin_submit().unwrap();
        assert!(matches!(submission, Submission::Create(ref f) if f.name == "B"));
        assert!(editor.is_submitting());
        assert_eq!(editor.submit_label(), Some("Creating..."));

        let outcome = editor.finish_submit(Ok(prompt(2, "B"))).unwrap();

        assert_eq!(outcome, EditorOutcome::Created(prompt(2, "B")));
        assert_eq!(editor, RecordEditor::new());
    }

    #[test]
    fn test_update_failure_keeps_state_and_draft() {
        let mut editor = editing(5);
        editor.set_field(DraftField::Name, "X".to_string()).unwrap();
        let draft = editor.draft().clone();

        let submission = editor.begin_submit().unwrap();
        assert_eq!(submission, Submission::Update(PromptId(5), draft.clone()));

        let outcome = editor
            .finish_submit(Err(AppError::StoreUnavailable("down".to_string())))
            .unwrap();

        assert!(matches!(outcome, EditorOutcome::Failed(AppError::StoreUnavailable(_))));
        assert_eq!(editor.mode(), EditorMode::Editing(PromptId(5)));
        assert_eq!(editor.draft(), &draft);
        assert!(!editor.is_submitting());
        assert!(!editor.error().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_resubmit_clears_previous_error() {
        let mut editor = editing(5);
        editor.begin_submit().unwrap();
        editor
            .finish_submit(Err(AppError::Validation("bad".to_string())))
            .unwrap();
        assert!(editor.error().is_some());

        editor.begin_submit().unwrap();
        assert!(editor.error().is_none());
    }

    #[test]
    fn test_busy_flag_blocks_reentry_and_dismissal() {
        let mut editor = editing(5);
        editor.begin_submit().unwrap();

        assert_eq!(editor.begin_submit(), Err(TransitionError::Busy));
        assert_eq!(editor.cancel(), Err(TransitionError::Busy));
        assert!(!editor.request_dismiss());
        assert_eq!(
            editor.set_field(DraftField::Content, "x".to_string()),
            Err(TransitionError::Busy)
        );
        assert_eq!(editor.mode(), EditorMode::Editing(PromptId(5)));

        editor
            .finish_submit(Err(AppError::NotFound("gone".to_string())))
            .unwrap();
        assert!(editor.request_dismiss());
        assert_eq!(editor.mode(), EditorMode::Closed);
        assert!(editor.error().is_none());
    }

    #[test]
    fn test_finish_without_submit_is_rejected() {
        let mut editor = editing(5);
        assert_eq!(
            editor.finish_submit(Ok(prompt(5, "X"))),
            Err(TransitionError::NotInFlight)
        );
    }

    #[test]
    fn test_submit_while_closed_is_rejected() {
        let mut editor = RecordEditor::new();
        assert_eq!(editor.begin_submit(), Err(TransitionError::NotOpen));
        assert!(!editor.is_submitting());
    }
}
