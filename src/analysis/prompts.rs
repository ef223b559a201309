use super::generator::{Prompt, PromptKind};

const SUMMARY_SYSTEM: &str = "You are an expert customer service analyst. \
Summarize the conversation in 2-3 clear sentences.";

const SENTIMENT_SYSTEM: &str = "Respond with one word: Positive, Negative, or Neutral \
based on the customer's emotions.";

pub const SUMMARY_MAX_TOKENS: u32 = 150;
pub const SENTIMENT_MAX_TOKENS: u32 = 10;

pub fn summary_prompt(transcript: &str) -> Prompt {
    Prompt {
        kind: PromptKind::Summary,
        system: SUMMARY_SYSTEM,
        user: format!("Summarize this customer call transcript:\n\n{}", transcript),
        temperature: 0.3,
        max_tokens: SUMMARY_MAX_TOKENS,
    }
}

pub fn sentiment_prompt(transcript: &str) -> Prompt {
    Prompt {
        kind: PromptKind::Sentiment,
        system: SENTIMENT_SYSTEM,
        user: format!("Analyze sentiment in this transcript:\n\n{}", transcript),
        temperature: 0.1,
        max_tokens: SENTIMENT_MAX_TOKENS,
    }
}
