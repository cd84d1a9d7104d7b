use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::prompts::models::{Prompt, PromptFields, PromptId};

// Create request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePromptDto {
    /// Display label, required
    pub name: String,

    /// Short summary, required
    pub description: String,

    /// Prompt body, stored verbatim
    pub content: String,
}

// Update request: always the full record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePromptDto {
    pub name: String,
    pub description: String,
    pub content: String,
}

impl From<CreatePromptDto> for PromptFields {
    fn from(dto: CreatePromptDto) -> Self {
        PromptFields::new(dto.name, dto.description, dto.content)
    }
}

impl From<UpdatePromptDto> for PromptFields {
    fn from(dto: UpdatePromptDto) -> Self {
        PromptFields::new(dto.name, dto.description, dto.content)
    }
}

impl From<PromptFields> for CreatePromptDto {
    fn from(fields: PromptFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            content: fields.content,
        }
    }
}

impl From<PromptFields> for UpdatePromptDto {
    fn from(fields: PromptFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            content: fields.content,
        }
    }
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromptResponseDto {
    #[schema(value_type = i64)]
    pub id: PromptId,
    pub name: String,
    pub description: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponseDto {
    fn from(p: Prompt) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            content: p.content,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<PromptResponseDto> for Prompt {
    fn from(dto: PromptResponseDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            content: dto.content,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}
