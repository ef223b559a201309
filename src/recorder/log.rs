use super::record::{LogRecord, LogSchema, TIMESTAMP_FORMAT};
use crate::analysis::Sentiment;
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("Failed to write call log {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to encode call log row: {0}")]
    Encode(#[from] csv::Error),

    #[error("Failed to read call log {}: {source}", .path.display())]
    Read { path: PathBuf, source: csv::Error },

    #[error("Malformed call log row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}

/// Append-only CSV log of analyzed calls
///
/// There is no locking: each row is encoded up front and written with a
/// single `write_all` on a file opened in append mode.
#[derive(Debug, Clone)]
pub struct CallLog {
    path: PathBuf,
    schema: LogSchema,
}

impl CallLog {
    pub fn new(path: impl Into<PathBuf>, schema: LogSchema) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> LogSchema {
        self.schema
    }

    fn io_error(&self, source: io::Error) -> RecorderError {
        RecorderError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_error(&self, source: csv::Error) -> RecorderError {
        RecorderError::Read {
            path: self.path.clone(),
            source,
        }
    }

    /// Append one row, writing the header first if the file did not exist
    pub fn append(&self, record: &LogRecord) -> Result<(), RecorderError> {
        let is_new = !self.path.exists();

        if is_new {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if is_new {
            writer.write_record(self.schema.header())?;
        }
        writer.write_record(record.fields(self.schema))?;
        let row = writer
            .into_inner()
            .map_err(|e| self.io_error(e.into_error()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(&row).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;

        if is_new {
            info!("Created call log at {}", self.path.display());
        }
        debug!("Appended {} call log row", record.sentiment);

        Ok(())
    }

    /// Append on the blocking pool so request handlers never stall the runtime
    pub async fn append_async(&self, record: LogRecord) -> Result<(), RecorderError> {
        let log = self.clone();
        tokio::task::spawn_blocking(move || log.append(&record))
            .await
            .map_err(|e| self.io_error(io::Error::other(e)))?
    }

    /// Read every data row back using this log's schema. A missing file is
    /// an empty log.
    pub fn read_records(&self) -> Result<Vec<LogRecord>, RecorderError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| self.read_error(e))?;

        let width = self.schema.header().len();
        let mut records = Vec::new();

        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| self.read_error(e))?;
            let row_number = index + 1;
            if row.len() != width {
                return Err(RecorderError::Malformed {
                    row: row_number,
                    reason: format!("expected {} fields, found {}", width, row.len()),
                });
            }

            let (timestamp, rest) = match self.schema {
                LogSchema::Timestamped => {
                    let ts = NaiveDateTime::parse_from_str(&row[0], TIMESTAMP_FORMAT).map_err(
                        |e| RecorderError::Malformed {
                            row: row_number,
                            reason: format!("bad timestamp {:?}: {}", &row[0], e),
                        },
                    )?;
                    (Some(ts), 1)
                }
                LogSchema::Plain => (None, 0),
            };

            let sentiment: Sentiment =
                row[rest + 2]
                    .parse()
                    .map_err(|e: crate::analysis::UnknownSentiment| RecorderError::Malformed {
                        row: row_number,
                        reason: e.to_string(),
                    })?;

            records.push(LogRecord {
                timestamp,
                transcript: row[rest].to_string(),
                summary: row[rest + 1].to_string(),
                sentiment,
            });
        }

        Ok(records)
    }
}
