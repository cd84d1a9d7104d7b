use crate::core::error::AppError;
use crate::features::prompts::models::PromptId;

use super::list_sync::PromptList;
use super::TransitionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(PromptId),
    /// Still confirming the same id, with the error recorded
    Failed(AppError),
}

/// Two-step delete: pick a target, then confirm or cancel.
///
/// `target` is `None` when idle. The target id is kept after a failed
/// delete so the user can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    target: Option<PromptId>,
    deleting: bool,
    error: Option<String>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<PromptId> {
        self.target
    }

    pub fn is_confirming(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn request(&mut self, id: PromptId) -> Result<(), TransitionError> {
        if self.deleting {
            return Err(TransitionError::Busy);
        }
        self.target = Some(id);
        self.error = None;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        if self.target.is_none() {
            return Err(TransitionError::NoTarget);
        }
        if self.deleting {
            return Err(TransitionError::Busy);
        }
        self.target = None;
        self.error = None;
        Ok(())
    }

    /// Escape key or click outside the dialog. Suppressed while deleting.
    pub fn request_dismiss(&mut self) -> bool {
        self.cancel().is_ok()
    }

    pub fn begin_delete(&mut self) -> Result<PromptId, TransitionError> {
        let id = self.target.ok_or(TransitionError::NoTarget)?;
        if self.deleting {
            return Err(TransitionError::Busy);
        }
        self.deleting = true;
        self.error = None;
        Ok(id)
    }

    pub fn finish_delete(
        &mut self,
        result: Result<(), AppError>,
    ) -> Result<DeleteOutcome, TransitionError> {
        if !self.deleting {
            return Err(TransitionError::NotInFlight);
        }
        let id = self.target.ok_or(TransitionError::NoTarget)?;
        self.deleting = false;

        match result {
            Ok(()) => {
                self.target = None;
                self.error = None;
                Ok(DeleteOutcome::Deleted(id))
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Ok(DeleteOutcome::Failed(err))
            }
        }
    }

    /// Name shown in the dialog body
    pub fn target_name(&self, list: &PromptList) -> Option<String> {
        let id = self.target?;
        Some(
            list.get(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "this prompt".to_string()),
        )
    }

    pub fn confirm_label(&self) -> &'static str {
        if self.deleting {
            "Deleting..."
        } else {
            "Yes, delete"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::prompt;

    #[test]
    fn test_request_clears_previous_error() {
        let mut deletion = DeleteConfirmation::new();
        deletion.request(PromptId(1)).unwrap();
        deletion.begin_delete().unwrap();
        deletion
            .finish_delete(Err(AppError::NotFound("gone".to_string())))
            .unwrap();
        assert!(deletion.error().is_some());

        deletion.request(PromptId(2)).unwrap();
        assert_eq!(deletion.target(), Some(PromptId(2)));
        assert!(deletion.error().is_none());
    }

    #[test]
    fn test_success_returns_to_idle() {
        let mut deletion = DeleteConfirmation::new();
        deletion.request(PromptId(1)).unwrap();

        assert_eq!(deletion.begin_delete(), Ok(PromptId(1)));
        assert_eq!(deletion.confirm_label(), "Deleting...");
        let outcome = deletion.finish_delete(Ok(())).unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted(PromptId(1)));
        assert_eq!(deletion, DeleteConfirmation::new());
    }

    #[test]
    fn test_failure_keeps_target_for_retry() {
        let mut deletion = DeleteConfirmation::new();
        deletion.request(PromptId(1)).unwrap();
        deletion.begin_delete().unwrap();

        let outcome = deletion
            .finish_delete(Err(AppError::NotFound("gone".to_string())))
            .unwrap();

        assert!(matches!(outcome, DeleteOutcome::Failed(AppError::NotFound(_))));
        assert_eq!(deletion.target(), Some(PromptId(1)));
        assert!(!deletion.is_deleting());
        assert!(deletion.error().is_some());
        assert_eq!(deletion.begin_delete(), Ok(PromptId(1)));
    }

    #[test]
    fn test_cannot_cancel_or_retarget_while_deleting() {
        let mut deletion = DeleteConfirmation::new();
        deletion.request(PromptId(1)).unwrap();
        deletion.begin_delete().unwrap();

        assert_eq!(deletion.cancel(), Err(TransitionError::Busy));
        assert!(!deletion.request_dismiss());
        assert_eq!(deletion.request(PromptId(2)), Err(TransitionError::Busy));
        assert_eq!(deletion.begin_delete(), Err(TransitionError::Busy));
        assert_eq!(deletion.target(), Some(PromptId(1)));
    }

    #[test]
    fn test_idle_transitions_are_rejected() {
        let mut deletion = DeleteConfirmation::new();
        assert_eq!(deletion.begin_delete(), Err(TransitionError::NoTarget));
        assert_eq!(deletion.cancel(), Err(TransitionError::NoTarget));
        assert_eq!(
            deletion.finish_delete(Ok(())),
            Err(TransitionError::NotInFlight)
        );
    }

    #[test]
    fn test_dismiss_when_idle_flag_clear() {
        let mut deletion = DeleteConfirmation::new();
        deletion.request(PromptId(3)).unwrap();
        assert!(deletion.request_dismiss());
        assert!(!deletion.is_confirming());
    }

    #[test]
    fn test_target_name_falls_back() {
        let mut list = PromptList::new();
        list.initialize(vec![prompt(1, "Alpha")]);
        let mut deletion = DeleteConfirmation::new();
        assert_eq!(deletion.target_name(&list), None);

        deletion.request(PromptId(1)).unwrap();
        assert_eq!(deletion.target_name(&list), Some("Alpha".to_string()));

        deletion.request(PromptId(9)).unwrap();
        assert_eq!(deletion.target_name(&list), Some("this prompt".to_string()));
    }
}
