use crate::error::AppError;

/// Minimum length of a trimmed transcript, in characters
pub const MIN_TRANSCRIPT_CHARS: usize = 20;

/// A transcript that passed validation: trimmed and long enough to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_TRANSCRIPT_CHARS {
            return Err(AppError::Validation(
                "Transcript too short or empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
