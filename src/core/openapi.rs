use utoipa::{Modify, OpenApi};

use crate::features::prompts::{dtos as prompts_dtos, handlers as prompts_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        prompts_handlers::prompt_handler::list_prompts,
        prompts_handlers::prompt_handler::create_prompt,
        prompts_handlers::prompt_handler::get_prompt,
        prompts_handlers::prompt_handler::update_prompt,
        prompts_handlers::prompt_handler::delete_prompt,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Prompts
            prompts_dtos::CreatePromptDto,
            prompts_dtos::UpdatePromptDto,
            prompts_dtos::PromptResponseDto,
            ApiResponse<prompts_dtos::PromptResponseDto>,
            ApiResponse<Vec<prompts_dtos::PromptResponseDto>>,
        )
    ),
    tags(
        (name = "prompts", description = "Create, list, edit and delete prompts"),
    ),
    info(
        title = "Prompt Manager API",
        version = "0.1.0",
        description = "Store, organize, and manage reusable AI prompts",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
