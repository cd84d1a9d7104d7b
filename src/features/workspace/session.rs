use std::sync::Arc;
use tokio::sync::watch;

use crate::features::prompts::gateway::PromptGateway;
use crate::features::prompts::models::{Prompt, PromptId};

use super::clipboard::{Clipboard, CopyIndicator};
use super::delete_confirmation::{DeleteConfirmation, DeleteOutcome};
use super::editor::{DraftField, EditorOutcome, RecordEditor, Submission};
use super::list_sync::PromptList;
use super::view::{DeleteView, EditorView, WorkspaceView};
use super::{TransitionError, WorkspaceError};

/// One prompt page session.
///
/// Mutators take `&mut self`, so transitions never interleave. Around each
/// gateway call the busy state is published before awaiting and the
/// settled state after.
pub struct PromptWorkspace {
    gateway: Arc<dyn PromptGateway>,
    list: PromptList,
    editor: RecordEditor,
    deletion: DeleteConfirmation,
    copier: CopyIndicator,
    loading: bool,
    load_error: Option<String>,
    view_tx: Arc<watch::Sender<WorkspaceView>>,
}

impl PromptWorkspace {
    pub fn new(gateway: Arc<dyn PromptGateway>, clipboard: Arc<dyn Clipboard>) -> Self {
        let initial = WorkspaceView {
            loading: true,
            ..WorkspaceView::default()
        };
        let (view_tx, _) = watch::channel(initial);
        let view_tx = Arc::new(view_tx);

        let copy_tx = Arc::clone(&view_tx);
        let copier = CopyIndicator::new(clipboard).with_listener(move |mark| {
            copy_tx.send_modify(|view| view.copied_id = mark);
        });

        Self {
            gateway,
            list: PromptList::new(),
            editor: RecordEditor::new(),
            deletion: DeleteConfirmation::new(),
            copier,
            loading: true,
            load_error: None,
            view_tx,
        }
    }

    /// Receive a fresh `WorkspaceView` after every transition
    pub fn subscribe(&self) -> watch::Receiver<WorkspaceView> {
        self.view_tx.subscribe()
    }

    pub fn view(&self) -> WorkspaceView {
        self.view_tx.borrow().clone()
    }

    pub fn prompts(&self) -> &[Prompt] {
        self.list.prompts()
    }

    pub fn list(&self) -> &PromptList {
        &self.list
    }

    pub fn editor(&self) -> &RecordEditor {
        &self.editor
    }

    pub fn deletion(&self) -> &DeleteConfirmation {
        &self.deletion
    }

    pub fn copied_id(&self) -> Option<PromptId> {
        self.copier.copied_id()
    }

    /// Fetch the initial list
    pub async fn load(&mut self) -> Result<(), WorkspaceError> {
        self.loading = true;
        self.load_error = None;
        self.publish();

        let result = self.gateway.list().await;
        self.loading = false;
        match result {
            Ok(prompts) => {
                tracing::debug!("Workspace loaded {} prompts", prompts.len());
                self.list.initialize(prompts);
                self.publish();
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to load prompts: {}", err);
                self.load_error = Some(err.to_string());
                self.publish();
                Err(err.into())
            }
        }
    }

    pub fn open_create(&mut self) -> Result<(), TransitionError> {
        self.editor.open_create()?;
        tracing::debug!("Editor opened for a new prompt");
        self.publish();
        Ok(())
    }

    pub fn open_edit(&mut self, id: PromptId) -> Result<(), TransitionError> {
        let prompt = self
            .list
            .get(id)
            .ok_or(TransitionError::UnknownPrompt(id))?;
        self.editor.open_edit(prompt)?;
        tracing::debug!("Editor opened for prompt {}", id);
        self.publish();
        Ok(())
    }

    pub fn set_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), TransitionError> {
        self.editor.set_field(field, value.into())?;
        self.publish();
        Ok(())
    }

    pub fn cancel_editor(&mut self) -> Result<(), TransitionError> {
        self.editor.cancel()?;
        self.publish();
        Ok(())
    }

    /// Returns `false` when the dismissal was suppressed
    pub fn dismiss_editor(&mut self) -> bool {
        let dismissed = self.editor.request_dismiss();
        if dismissed {
            self.publish();
        }
        dismissed
    }

    /// Send the draft to the service; on success the list is updated and
    /// the editor closes, on failure the error stays on the editor.
    pub async fn submit_editor(&mut self) -> Result<Prompt, WorkspaceError> {
        let submission = self.editor.begin_submit()?;
        self.publish();

        let result = match submission {
            Submission::Create(fields) => self.gateway.create(fields).await,
            Submission::Update(id, fields) => self.gateway.update(id, fields).await,
        };

        let outcome = self.editor.finish_submit(result)?;
        let settled = match outcome {
            EditorOutcome::Created(prompt) => {
                tracing::debug!("Prompt created with ID {}", prompt.id);
                self.list.on_created(prompt.clone());
                Ok(prompt)
            }
            EditorOutcome::Updated(prompt) => {
                tracing::debug!("Prompt {} updated", prompt.id);
                self.list.on_updated(prompt.clone());
                Ok(prompt)
            }
            EditorOutcome::Failed(err) => {
                tracing::debug!("Save prompt failed: {}", err);
                Err(err.into())
            }
        };
        self.publish();
        settled
    }

    pub fn request_delete(&mut self, id: PromptId) -> Result<(), TransitionError> {
        self.deletion.request(id)?;
        self.publish();
        Ok(())
    }

    pub fn cancel_delete(&mut self) -> Result<(), TransitionError> {
        self.deletion.cancel()?;
        self.publish();
        Ok(())
    }

    /// Returns `false` when the dismissal was suppressed
    pub fn dismiss_delete(&mut self) -> bool {
        let dismissed = self.deletion.request_dismiss();
        if dismissed {
            self.publish();
        }
        dismissed
    }

    pub async fn confirm_delete(&mut self) -> Result<PromptId, WorkspaceError> {
        let id = self.deletion.begin_delete()?;
        self.publish();

        let result = self.gateway.delete(id).await;

        let outcome = self.deletion.finish_delete(result)?;
        let settled = match outcome {
            DeleteOutcome::Deleted(id) => {
                tracing::debug!("Prompt {} deleted", id);
                self.list.on_deleted(id);
                Ok(id)
            }
            DeleteOutcome::Failed(err) => {
                tracing::debug!("Delete prompt {} failed: {}", id, err);
                Err(err.into())
            }
        };
        self.publish();
        settled
    }

    /// Copy a listed prompt's content. `Ok(false)` when the clipboard failed.
    pub fn copy(&mut self, id: PromptId) -> Result<bool, TransitionError> {
        let content = self
            .list
            .get(id)
            .map(|p| p.content.clone())
            .ok_or(TransitionError::UnknownPrompt(id))?;
        Ok(self.copier.copy(id, &content))
    }

    /// `copied_id` is left to the copy listener, which is the only writer
    /// that sees every mark change in order.
    fn publish(&self) {
        let view = WorkspaceView {
            prompts: self.list.prompts().to_vec(),
            loading: self.loading,
            load_error: self.load_error.clone(),
            editor: EditorView::from(&self.editor),
            deletion: DeleteView::new(&self.deletion, &self.list),
            copied_id: None,
        };
        self.view_tx.send_modify(|current| {
            *current = WorkspaceView {
                copied_id: current.copied_id,
                ..view
            };
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{Mutex, Notify};

    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::features::prompts::models::PromptFields;
    use crate::features::prompts::services::PromptService;
    use crate::features::prompts::stores::{InMemoryPromptStore, PromptStore};
    use crate::features::workspace::clipboard::MemoryClipboard;
    use crate::features::workspace::editor::EditorMode;
    use crate::shared::test_helpers::{fake_fields, prompt};

    fn workspace_with(store: Arc<InMemoryPromptStore>) -> PromptWorkspace {
        let service = Arc::new(PromptService::new(store));
        PromptWorkspace::new(service, Arc::new(MemoryClipboard::new()))
    }

    async fn seeded(names: &[&str]) -> (Arc<InMemoryPromptStore>, PromptWorkspace) {
        let store = Arc::new(InMemoryPromptStore::new());
        for name in names {
            store
                .insert(&PromptFields::new(*name, "d", "c"))
                .await
                .unwrap();
        }
        let mut workspace = workspace_with(store.clone());
        workspace.load().await.unwrap();
        (store, workspace)
    }

    fn fill_draft(workspace: &mut PromptWorkspace, fields: &PromptFields) {
        workspace.set_field(DraftField::Name, fields.name.clone()).unwrap();
        workspace
            .set_field(DraftField::Description, fields.description.clone())
            .unwrap();
        workspace
            .set_field(DraftField::Content, fields.content.clone())
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_prepends_to_list() {
        let (_, mut workspace) = seeded(&["A"]).await;

        workspace.open_create().unwrap();
        fill_draft(&mut workspace, &PromptFields::new("B", "d", "c"));
        let created = workspace.submit_editor().await.unwrap();

        assert_eq!(created.id, PromptId(2));
        let names: Vec<_> = workspace.prompts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(workspace.list().ids(), vec![PromptId(2), PromptId(1)]);
        assert_eq!(workspace.editor().mode(), EditorMode::Closed);
    }

    #[tokio::test]
    async fn test_create_validation_failure_keeps_draft_and_list() {
        let (_, mut workspace) = seeded(&["A"]).await;
        let before = workspace.list().clone();

        workspace.open_create().unwrap();
        workspace.set_field(DraftField::Name, "B").unwrap();
        let err = workspace.submit_editor().await.unwrap_err();

        assert!(matches!(err, WorkspaceError::Service(AppError::Validation(_))));
        assert_eq!(workspace.list(), &before);
        assert_eq!(workspace.editor().mode(), EditorMode::Creating);
        assert_eq!(workspace.editor().draft().name, "B");
        assert!(workspace.editor().error().is_some());
        assert!(!workspace.editor().is_submitting());
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let (_, mut workspace) = seeded(&["A", "B", "C"]).await;
        let ids = workspace.list().ids();

        workspace.open_edit(PromptId(2)).unwrap();
        workspace.set_field(DraftField::Name, "B2").unwrap();
        workspace.submit_editor().await.unwrap();

        assert_eq!(workspace.list().ids(), ids);
        assert_eq!(workspace.list().get(PromptId(2)).unwrap().name, "B2");
        assert_eq!(workspace.list().get(PromptId(1)).unwrap().name, "A");
        assert_eq!(workspace.list().get(PromptId(3)).unwrap().name, "C");
    }

    #[tokio::test]
    async fn test_update_store_outage_keeps_editing_state() {
        let (store, mut workspace) = seeded(&["A"]).await;

        workspace.open_edit(PromptId(1)).unwrap();
        workspace.set_field(DraftField::Name, "X").unwrap();
        let draft = workspace.editor().draft().clone();

        store.set_available(false);
        let err = workspace.submit_editor().await.unwrap_err();

        assert!(matches!(err, WorkspaceError::Service(AppError::StoreUnavailable(_))));
        assert_eq!(workspace.editor().mode(), EditorMode::Editing(PromptId(1)));
        assert_eq!(workspace.editor().draft(), &draft);
        assert!(!workspace.editor().error().unwrap_or_default().is_empty());
        assert_eq!(workspace.list().get(PromptId(1)).unwrap().name, "A");
    }

    #[tokio::test]
    async fn test_delete_not_found_keeps_list_and_confirming() {
        let (store, mut workspace) = seeded(&["A", "B"]).await;
        // Someone else removed it already
        store.delete(PromptId(1)).await.unwrap();

        workspace.request_delete(PromptId(1)).unwrap();
        let err = workspace.confirm_delete().await.unwrap_err();

        assert!(matches!(err, WorkspaceError::Service(AppError::NotFound(_))));
        assert_eq!(workspace.list().ids(), vec![PromptId(2), PromptId(1)]);
        assert_eq!(workspace.deletion().target(), Some(PromptId(1)));
        assert!(workspace.deletion().error().is_some());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let (_, mut workspace) = seeded(&["A", "B", "C"]).await;

        workspace.request_delete(PromptId(2)).unwrap();
        assert_eq!(workspace.view().deletion.target_name.as_deref(), Some("B"));
        let deleted = workspace.confirm_delete().await.unwrap();

        assert_eq!(deleted, PromptId(2));
        assert_eq!(workspace.list().ids(), vec![PromptId(3), PromptId(1)]);
        assert!(!workspace.deletion().is_confirming());
    }

    #[tokio::test]
    async fn test_editor_and_delete_selection_coexist() {
        let (_, mut workspace) = seeded(&["A", "B"]).await;

        workspace.open_edit(PromptId(1)).unwrap();
        workspace.request_delete(PromptId(2)).unwrap();

        let view = workspace.view();
        assert_eq!(view.editor.mode, EditorMode::Editing(PromptId(1)));
        assert_eq!(view.deletion.target, Some(PromptId(2)));
    }

    #[tokio::test]
    async fn test_open_edit_unknown_prompt() {
        let (_, mut workspace) = seeded(&["A"]).await;
        assert_eq!(
            workspace.open_edit(PromptId(9)),
            Err(TransitionError::UnknownPrompt(PromptId(9)))
        );
    }

    #[tokio::test]
    async fn test_load_failure_sets_error() {
        let store = Arc::new(InMemoryPromptStore::new());
        store.set_available(false);
        let mut workspace = workspace_with(store);
        assert!(workspace.view().loading);

        let err = workspace.load().await.unwrap_err();

        assert!(matches!(err, WorkspaceError::Service(AppError::StoreUnavailable(_))));
        let view = workspace.view();
        assert!(!view.loading);
        assert!(view.load_error.is_some());
        assert!(view.prompts.is_empty());
    }

    #[tokio::test]
    async fn test_membership_matches_created_minus_deleted() {
        let (_, mut workspace) = seeded(&[]).await;
        let mut expected = BTreeSet::new();

        for round in 0..12 {
            workspace.open_create().unwrap();
            fill_draft(&mut workspace, &fake_fields());
            let created = workspace.submit_editor().await.unwrap();
            expected.insert(created.id);

            if round % 3 == 2 {
                let victim = *expected.iter().next().unwrap();
                workspace.request_delete(victim).unwrap();
                workspace.confirm_delete().await.unwrap();
                expected.remove(&victim);
            }

            if round % 4 == 1 {
                let target = *expected.iter().next_back().unwrap();
                workspace.open_edit(target).unwrap();
                workspace.set_field(DraftField::Content, "edited").unwrap();
                workspace.submit_editor().await.unwrap();
            }
        }

        let actual: BTreeSet<_> = workspace.list().ids().into_iter().collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_marks_prompt_in_view() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let service = Arc::new(PromptService::new(Arc::new(InMemoryPromptStore::new())));
        let mut workspace = PromptWorkspace::new(service, clipboard.clone());
        workspace.open_create().unwrap();
        fill_draft(&mut workspace, &PromptFields::new("A", "d", "hello"));
        let created = workspace.submit_editor().await.unwrap();
        let mut views = workspace.subscribe();

        assert_eq!(workspace.copy(created.id), Ok(true));
        assert_eq!(clipboard.contents(), Some("hello".to_string()));
        assert_eq!(views.borrow_and_update().copied_id, Some(created.id));

        tokio::time::sleep(Duration::from_millis(1501)).await;
        tokio::task::yield_now().await;

        assert_eq!(workspace.copied_id(), None);
        assert_eq!(views.borrow_and_update().copied_id, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_mark_follows_recopy_after_reset() {
        let (_, mut workspace) = seeded(&["A", "B"]).await;
        let ids = workspace.list().ids();

        workspace.copy(ids[0]).unwrap();
        tokio::time::sleep(Duration::from_millis(1501)).await;
        tokio::task::yield_now().await;
        workspace.copy(ids[1]).unwrap();
        workspace.open_create().unwrap();

        assert_eq!(workspace.copied_id(), Some(ids[1]));
        assert_eq!(workspace.view().copied_id, Some(ids[1]));
        assert_eq!(workspace.view().editor.mode, EditorMode::Creating);
    }

    #[tokio::test]
    async fn test_copy_unknown_prompt() {
        let (_, mut workspace) = seeded(&["A"]).await;
        assert_eq!(
            workspace.copy(PromptId(5)),
            Err(TransitionError::UnknownPrompt(PromptId(5)))
        );
    }

    /// Gateway whose create blocks until released, to observe the busy state
    struct GatedGateway {
        release: Notify,
        created: Mutex<Option<Prompt>>,
    }

    #[async_trait]
    impl PromptGateway for GatedGateway {
        async fn list(&self) -> Result<Vec<Prompt>> {
            Ok(Vec::new())
        }

        async fn create(&self, _fields: PromptFields) -> Result<Prompt> {
            self.release.notified().await;
            Ok(self.created.lock().await.take().unwrap_or_else(|| prompt(1, "A")))
        }

        async fn update(&self, id: PromptId, _fields: PromptFields) -> Result<Prompt> {
            Err(AppError::NotFound(format!("Prompt with id {} not found", id)))
        }

        async fn delete(&self, id: PromptId) -> Result<()> {
            Err(AppError::NotFound(format!("Prompt with id {} not found", id)))
        }
    }

    #[tokio::test]
    async fn test_busy_state_is_published_while_in_flight() {
        let gateway = Arc::new(GatedGateway {
            release: Notify::new(),
            created: Mutex::new(Some(prompt(7, "Gated"))),
        });
        let mut workspace =
            PromptWorkspace::new(gateway.clone(), Arc::new(MemoryClipboard::new()));
        workspace.load().await.unwrap();
        workspace.open_create().unwrap();
        fill_draft(&mut workspace, &PromptFields::new("Gated", "d", "c"));

        let mut views = workspace.subscribe();
        let task = tokio::spawn(async move {
            let result = workspace.submit_editor().await;
            (workspace, result)
        });

        views
            .wait_for(|view| view.editor.submitting)
            .await
            .unwrap();
        let busy = views.borrow().clone();
        assert!(!busy.editor.dismissible);
        assert_eq!(busy.editor.submit_label, Some("Creating..."));
        assert!(busy.prompts.is_empty());

        gateway.release.notify_one();
        let (workspace, result) = task.await.unwrap();

        assert_eq!(result.unwrap().id, PromptId(7));
        assert_eq!(workspace.list().ids(), vec![PromptId(7)]);
        assert!(workspace.view().editor.dismissible);
    }
}
