//! Call log persistence
//!
//! Every successful analysis becomes one row in a flat CSV file. The file is
//! only ever appended to; the header is written once, when the file is created.

mod log;
mod record;

pub use log::{CallLog, RecorderError};
pub use record::{collapse_newlines, LogRecord, LogSchema, TIMESTAMP_FORMAT};
