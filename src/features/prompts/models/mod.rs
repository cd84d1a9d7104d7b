mod prompt;

pub use prompt::{Prompt, PromptFields, PromptId};
