use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::prompts::models::{Prompt, PromptFields, PromptId};

use super::PromptStore;

struct MemoryState {
    /// Newest first
    prompts: Vec<Prompt>,
    next_id: i64,
}

/// Process-local PromptStore for development and tests.
///
/// Ids come from a counter that only moves forward, so a deleted id is
/// never handed out again. `set_available(false)` makes every call fail
/// with `StoreUnavailable`.
pub struct InMemoryPromptStore {
    state: RwLock<MemoryState>,
    available: AtomicBool,
}

impl Default for InMemoryPromptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPromptStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                prompts: Vec::new(),
                next_id: 1,
            }),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::StoreUnavailable(
                "In-memory prompt store is offline".to_string(),
            ))
        }
    }
}

#[async_trait]
impl PromptStore for InMemoryPromptStore {
    async fn list(&self) -> Result<Vec<Prompt>> {
        self.ensure_available()?;
        Ok(self.state.read().await.prompts.clone())
    }

    async fn find_by_id(&self, id: PromptId) -> Result<Option<Prompt>> {
        self.ensure_available()?;
        let state = self.state.read().await;
        Ok(state.prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, fields: &PromptFields) -> Result<Prompt> {
        self.ensure_available()?;
        let mut state = self.state.write().await;

        let now = Utc::now();
        let prompt = Prompt {
            id: PromptId(state.next_id),
            name: fields.name.clone(),
            description: fields.description.clone(),
            content: fields.content.clone(),
            created_at: now,
            updated_at: now,
        };
        state.next_id += 1;
        state.prompts.insert(0, prompt.clone());

        Ok(prompt)
    }

    async fn update(&self, id: PromptId, fields: &PromptFields) -> Result<Option<Prompt>> {
        self.ensure_available()?;
        let mut state = self.state.write().await;

        let Some(existing) = state.prompts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        existing.name = fields.name.clone();
        existing.description = fields.description.clone();
        existing.content = fields.content.clone();
        existing.updated_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: PromptId) -> Result<bool> {
        self.ensure_available()?;
        let mut state = self.state.write().await;

        let before = state.prompts.len();
        state.prompts.retain(|p| p.id != id);
        Ok(state.prompts.len() < before)
    }
}
