//! Client-side view of the Prompt Service.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::prompts::models::{Prompt, PromptFields, PromptId};
use crate::features::prompts::services::PromptService;

/// The four calls a workspace makes against the Prompt Service.
///
/// Implemented in-process by [`PromptService`] and over HTTP by
/// [`crate::features::prompts::HttpPromptClient`].
#[async_trait]
pub trait PromptGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Prompt>>;

    async fn create(&self, fields: PromptFields) -> Result<Prompt>;

    async fn update(&self, id: PromptId, fields: PromptFields) -> Result<Prompt>;

    async fn delete(&self, id: PromptId) -> Result<()>;
}

#[async_trait]
impl PromptGateway for PromptService {
    async fn list(&self) -> Result<Vec<Prompt>> {
        PromptService::list(self).await
    }

    async fn create(&self, fields: PromptFields) -> Result<Prompt> {
        PromptService::create(self, fields).await
    }

    async fn update(&self, id: PromptId, fields: PromptFields) -> Result<Prompt> {
        PromptService::update(self, id, fields).await
    }

    async fn delete(&self, id: PromptId) -> Result<()> {
        PromptService::delete(self, id).await
    }
}
