pub mod prompt_dto;

pub use prompt_dto::{CreatePromptDto, PromptResponseDto, UpdatePromptDto};
