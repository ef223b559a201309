use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::generator::AnalysisError;

/// Closed set of sentiment labels a call can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Scan order for substring matching
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSentiment(pub String);

impl fmt::Display for UnknownSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sentiment label {:?}", self.0)
    }
}

impl std::error::Error for UnknownSentiment {}

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    /// Case-insensitive exact match on the trimmed label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Sentiment::ALL
            .into_iter()
            .find(|sentiment| sentiment.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownSentiment(s.to_string()))
    }
}

/// How raw model output is coerced into a [`Sentiment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentPolicy {
    /// The whole trimmed reply must be a label; anything else becomes `Neutral`
    #[default]
    Exact,
    /// First label found anywhere in the reply wins; no label is an error
    Substring,
}

impl SentimentPolicy {
    pub fn normalize(self, raw: &str) -> Result<Sentiment, AnalysisError> {
        match self {
            SentimentPolicy::Exact => Ok(raw.parse().unwrap_or(Sentiment::Neutral)),
            SentimentPolicy::Substring => {
                let lowered = raw.to_lowercase();
                Sentiment::ALL
                    .into_iter()
                    .find(|sentiment| lowered.contains(&sentiment.as_str().to_lowercase()))
                    .ok_or_else(|| AnalysisError::UnrecognizedSentiment(raw.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!("  NEGATIVE\n".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert_eq!("Neutral".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert!("mixed".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_exact_policy() {
        let policy = SentimentPolicy::Exact;
        assert_eq!(policy.normalize("Positive").unwrap(), Sentiment::Positive);
        assert_eq!(policy.normalize(" negative ").unwrap(), Sentiment::Negative);
        assert_eq!(
            policy.normalize("I think this is quite POSITIVE overall").unwrap(),
            Sentiment::Neutral
        );
        assert_eq!(policy.normalize("Positive.").unwrap(), Sentiment::Neutral);
        assert_eq!(policy.normalize("").unwrap(), Sentiment::Neutral);
    }

    #[test]
    fn test_substring_policy() {
        let policy = SentimentPolicy::Substring;
        assert_eq!(
            policy.normalize("I think this is quite POSITIVE overall").unwrap(),
            Sentiment::Positive
        );
        assert_eq!(policy.normalize("Negative.").unwrap(), Sentiment::Negative);
        assert_eq!(
            policy.normalize("Mostly neutral, slightly negative").unwrap(),
            Sentiment::Negative,
            "labels are scanned in Positive, Negative, Neutral order"
        );
    }

    #[test]
    fn test_substring_policy_rejects_unknown_label() {
        let err = SentimentPolicy::Substring.normalize("Frustrated").unwrap_err();
        assert!(matches!(err, AnalysisError::UnrecognizedSentiment(ref raw) if raw == "Frustrated"));
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Sentiment::Negative.to_string(), "Negative");
        assert_eq!(serde_json::to_string(&Sentiment::Neutral).unwrap(), "\"Neutral\"");
    }
}
