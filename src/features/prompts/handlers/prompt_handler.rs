use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::prompts::dtos::{CreatePromptDto, PromptResponseDto, UpdatePromptDto};
use crate::features::prompts::models::PromptId;
use crate::features::prompts::services::PromptService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a new prompt
#[utoipa::path(
    post,
    path = "/api/prompts",
    request_body = CreatePromptDto,
    responses(
        (status = 201, description = "Prompt created successfully", body = ApiResponse<PromptResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 503, description = "Prompt store unavailable")
    ),
    tag = "prompts"
)]
pub async fn create_prompt(
    State(service): State<Arc<PromptService>>,
    AppJson(dto): AppJson<CreatePromptDto>,
) -> Result<(StatusCode, Json<ApiResponse<PromptResponseDto>>)> {
    let prompt = service.create(dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(prompt.into()), None, None)),
    ))
}

/// Get a prompt by ID
#[utoipa::path(
    get,
    path = "/api/prompts/{id}",
    params(
        ("id" = i64, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt retrieved successfully", body = ApiResponse<PromptResponseDto>),
        (status = 404, description = "Prompt not found"),
        (status = 503, description = "Prompt store unavailable")
    ),
    tag = "prompts"
)]
pub async fn get_prompt(
    State(service): State<Arc<PromptService>>,
    AppPath(id): AppPath<PromptId>,
) -> Result<Json<ApiResponse<PromptResponseDto>>> {
    let prompt = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(prompt.into()), None, None)))
}

/// List all prompts, newest first
#[utoipa::path(
    get,
    path = "/api/prompts",
    responses(
        (status = 200, description = "Prompts retrieved successfully", body = ApiResponse<Vec<PromptResponseDto>>),
        (status = 503, description = "Prompt store unavailable")
    ),
    tag = "prompts"
)]
pub async fn list_prompts(
    State(service): State<Arc<PromptService>>,
) -> Result<Json<ApiResponse<Vec<PromptResponseDto>>>> {
    let prompts: Vec<PromptResponseDto> = service
        .list()
        .await?
        .into_iter()
        .map(PromptResponseDto::from)
        .collect();
    let total = prompts.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(prompts),
        None,
        Some(Meta { total }),
    )))
}

/// Replace a prompt's name, description and content
#[utoipa::path(
    put,
    path = "/api/prompts/{id}",
    params(
        ("id" = i64, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptDto,
    responses(
        (status = 200, description = "Prompt updated successfully", body = ApiResponse<PromptResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Prompt not found"),
        (status = 503, description = "Prompt store unavailable")
    ),
    tag = "prompts"
)]
pub async fn update_prompt(
    State(service): State<Arc<PromptService>>,
    AppPath(id): AppPath<PromptId>,
    AppJson(dto): AppJson<UpdatePromptDto>,
) -> Result<Json<ApiResponse<PromptResponseDto>>> {
    let prompt = service.update(id, dto.into()).await?;
    Ok(Json(ApiResponse::success(Some(prompt.into()), None, None)))
}

/// Permanently delete a prompt
#[utoipa::path(
    delete,
    path = "/api/prompts/{id}",
    params(
        ("id" = i64, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt deleted successfully"),
        (status = 404, description = "Prompt not found"),
        (status = 503, description = "Prompt store unavailable")
    ),
    tag = "prompts"
)]
pub async fn delete_prompt(
    State(service): State<Arc<PromptService>>,
    AppPath(id): AppPath<PromptId>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
