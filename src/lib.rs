//! Prompt manager: a REST service for storing reusable AI prompts, plus the
//! page-local workspace state that keeps a client's list in step with it.

pub mod core;
pub mod features;
pub mod shared;
