//! Prompt Store port and its adapters.

mod memory_prompt_store;
mod pg_prompt_store;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::prompts::models::{Prompt, PromptFields, PromptId};

pub use memory_prompt_store::InMemoryPromptStore;
pub use pg_prompt_store::PgPromptStore;

/// Durable storage for prompts.
///
/// Implementations report infrastructure failures as
/// `AppError::StoreUnavailable`; missing rows are signalled through
/// `None`/`false` so the service decides how to surface them.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// All prompts, newest first
    async fn list(&self) -> Result<Vec<Prompt>>;

    async fn find_by_id(&self, id: PromptId) -> Result<Option<Prompt>>;

    /// Insert a prompt; the store assigns the id
    async fn insert(&self, fields: &PromptFields) -> Result<Prompt>;

    /// Replace every editable field. `None` when the id does not exist.
    async fn update(&self, id: PromptId, fields: &PromptFields) -> Result<Option<Prompt>>;

    /// Hard delete. `false` when the id does not exist.
    async fn delete(&self, id: PromptId) -> Result<bool>;
}
