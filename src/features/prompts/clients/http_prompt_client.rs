use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::core::error::{AppError, Result};
use crate::features::prompts::dtos::{CreatePromptDto, PromptResponseDto, UpdatePromptDto};
use crate::features::prompts::gateway::PromptGateway;
use crate::features::prompts::models::{Prompt, PromptFields, PromptId};
use crate::shared::types::ApiResponse;

/// Map a failed HTTP status back onto the service's error taxonomy
fn error_for_status(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            AppError::Validation(message)
        }
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        _ => AppError::StoreUnavailable(message),
    }
}

/// Talks to the prompt REST API exposed by this crate's server
pub struct HttpPromptClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpPromptClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    fn prompts_url(&self) -> String {
        format!("{}/api/prompts", self.base_url)
    }

    fn prompt_url(&self, id: PromptId) -> String {
        format!("{}/api/prompts/{}", self.base_url, id)
    }

    /// Send a request and unwrap the `ApiResponse` envelope
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<Option<T>> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Prompt service request failed: {}", e);
            AppError::StoreUnavailable(format!("Prompt service unreachable: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to read prompt service response: {}", e))
        })?;

        if status.is_success() {
            let envelope = serde_json::from_str::<ApiResponse<T>>(&body).map_err(|e| {
                tracing::error!("Failed to parse prompt service response: {}", e);
                AppError::StoreUnavailable(format!("Failed to parse response: {}", e))
            })?;
            return Ok(envelope.data);
        }

        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| format!("Prompt service returned {}", status));
        tracing::debug!("Prompt service error {}: {}", status, message);

        Err(error_for_status(status, message))
    }

    async fn send_prompt(&self, request: reqwest::RequestBuilder) -> Result<Prompt> {
        self.send::<PromptResponseDto>(request)
            .await?
            .map(Prompt::from)
            .ok_or_else(|| {
                AppError::StoreUnavailable("Prompt service returned no prompt".to_string())
            })
    }
}

#[async_trait]
impl PromptGateway for HttpPromptClient {
    async fn list(&self) -> Result<Vec<Prompt>> {
        let prompts = self
            .send::<Vec<PromptResponseDto>>(self.http_client.get(self.prompts_url()))
            .await?
            .unwrap_or_default();

        Ok(prompts.into_iter().map(Prompt::from).collect())
    }

    async fn create(&self, fields: PromptFields) -> Result<Prompt> {
        let body = CreatePromptDto::from(fields);
        self.send_prompt(self.http_client.post(self.prompts_url()).json(&body))
            .await
    }

    async fn update(&self, id: PromptId, fields: PromptFields) -> Result<Prompt> {
        let body = UpdatePromptDto::from(fields);
        self.send_prompt(self.http_client.put(self.prompt_url(id)).json(&body))
            .await
    }

    async fn delete(&self, id: PromptId) -> Result<()> {
        self.send::<()>(self.http_client.delete(self.prompt_url(id)))
            .await?;
        Ok(())
    }
}
