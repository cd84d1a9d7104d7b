pub mod http_prompt_client;

pub use http_prompt_client::HttpPromptClient;
