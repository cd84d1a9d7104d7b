use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::prompts::models::{Prompt, PromptFields, PromptId};
use crate::features::prompts::stores::PromptStore;

fn not_found(id: PromptId) -> AppError {
    AppError::NotFound(format!("Prompt with id {} not found", id))
}

/// Validate input, then log and convert the failure into `AppError::Validation`
fn validate_fields(fields: &PromptFields) -> Result<()> {
    fields.validate().map_err(|e| {
        tracing::warn!("Rejected prompt input: {}", e);
        AppError::from(e)
    })
}

/// Request/response boundary in front of the Prompt Store.
///
/// Holds no state besides the store handle; each call is one round trip
/// with no retry.
pub struct PromptService {
    store: Arc<dyn PromptStore>,
}

impl std::fmt::Debug for PromptService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptService")
            .field("store", &"<dyn PromptStore>")
            .finish()
    }
}

impl PromptService {
    pub fn new(store: Arc<dyn PromptStore>) -> Self {
        Self { store }
    }

    /// List all prompts, newest first
    pub async fn list(&self) -> Result<Vec<Prompt>> {
        self.store.list().await
    }

    /// Get prompt by ID
    pub async fn get(&self, id: PromptId) -> Result<Prompt> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a new prompt
    pub async fn create(&self, fields: PromptFields) -> Result<Prompt> {
        validate_fields(&fields)?;

        let prompt = self.store.insert(&fields).await?;
        tracing::info!("Prompt created with ID {}", prompt.id);

        Ok(prompt)
    }

    /// Replace every field of an existing prompt
    pub async fn update(&self, id: PromptId, fields: PromptFields) -> Result<Prompt> {
        validate_fields(&fields)?;

        let prompt = self.store.update(id, &fields).await?.ok_or_else(|| {
            tracing::warn!("Update of unknown prompt {}", id);
            not_found(id)
        })?;
        tracing::info!("Prompt {} updated", id);

        Ok(prompt)
    }

    /// Hard delete. Deleting an id that does not exist is `NotFound`, not a no-op.
    pub async fn delete(&self, id: PromptId) -> Result<()> {
        if !self.store.delete(id).await? {
            tracing::warn!("Delete of unknown prompt {}", id);
            return Err(not_found(id));
        }
        tracing::info!("Prompt {} deleted", id);

        Ok(())
    }
}
