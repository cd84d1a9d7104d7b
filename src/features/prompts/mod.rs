pub mod clients;
pub mod dtos;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use clients::HttpPromptClient;
pub use gateway::PromptGateway;
pub use services::PromptService;
