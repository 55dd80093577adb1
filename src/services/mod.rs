// Service exports
pub mod llm;

pub use llm::{CompletionClient, LlmError, OpenAiClient};
