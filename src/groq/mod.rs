pub mod client;
pub mod messages;

pub use client::{GroqClient, GroqConfig};
pub use messages::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
