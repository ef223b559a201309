use crate::analysis::Sentiment;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp format used in the log and in API responses
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column layout of the call log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSchema {
    /// `Timestamp,Transcript,Summary,Sentiment`
    #[default]
    Timestamped,
    /// `Transcript,Summary,Sentiment`
    Plain,
}

impl LogSchema {
    pub fn header(self) -> &'static [&'static str] {
        match self {
            LogSchema::Timestamped => &["Timestamp", "Transcript", "Summary", "Sentiment"],
            LogSchema::Plain => &["Transcript", "Summary", "Sentiment"],
        }
    }
}

/// One analyzed call as stored in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Absent only when read back from a `Plain` log
    #[serde(with = "timestamp_format")]
    pub timestamp: Option<NaiveDateTime>,
    pub transcript: String,
    pub summary: String,
    pub sentiment: Sentiment,
}

impl LogRecord {
    /// Stamp a new record with the current local time (second precision)
    /// and collapse line breaks in the transcript.
    pub fn new(transcript: &str, summary: &str, sentiment: Sentiment) -> Self {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Self {
            timestamp: Some(timestamp),
            transcript: collapse_newlines(transcript),
            summary: summary.to_string(),
            sentiment,
        }
    }

    pub fn formatted_timestamp(&self) -> Option<String> {
        self.timestamp
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Row fields in column order for the given schema
    pub fn fields(&self, schema: LogSchema) -> Vec<String> {
        let mut fields = Vec::with_capacity(4);
        if schema == LogSchema::Timestamped {
            fields.push(self.formatted_timestamp().unwrap_or_default());
        }
        fields.push(self.transcript.clone());
        fields.push(self.summary.clone());
        fields.push(self.sentiment.to_string());
        fields
    }
}

/// Replace each line break (`\r\n` or `\n`) with a single space
pub fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\nb\r\nc"), "a b c");
        assert_eq!(collapse_newlines("a\n\nb"), "a  b");
        assert_eq!(collapse_newlines("no breaks"), "no breaks");
    }

    #[test]
    fn test_fields_per_schema() {
        let record = LogRecord::new("Agent: hello\nCustomer: hi", "Greeting.", Sentiment::Neutral);

        let plain = record.fields(LogSchema::Plain);
        assert_eq!(plain, vec!["Agent: hello Customer: hi", "Greeting.", "Neutral"]);

        let stamped = record.fields(LogSchema::Timestamped);
        assert_eq!(stamped.len(), 4);
        assert_eq!(stamped[0].len(), "2025-01-01 00:00:00".len());
        assert_eq!(&stamped[1..], &plain[..]);
    }

    #[test]
    fn test_header() {
        assert_eq!(LogSchema::Timestamped.header().len(), 4);
        assert_eq!(LogSchema::Plain.header(), &["Transcript", "Summary", "Sentiment"]);
    }

    #[test]
    fn test_serializes_formatted_timestamp() {
        let mut record = LogRecord::new("t", "s", Sentiment::Positive);
        record.timestamp = NaiveDateTime::parse_from_str("2025-10-27 14:30:05", TIMESTAMP_FORMAT).ok();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2025-10-27 14:30:05");
        assert_eq!(json["sentiment"], "Positive");
    }
}
