pub mod prompts;
pub mod workspace;
