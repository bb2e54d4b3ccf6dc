use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::dispatch::DispatchError;

/// One line of the dispatch error log.
#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    pub timestamp: DateTime<Utc>,
    /// Correlates the line with the save event's tracing output.
    pub event: Uuid,
    pub kind: String,
    pub message: String,
}

/// Append-only JSON-lines error log, kept outside the project working tree.
///
/// Logging is best effort: a failing log write is reported via tracing and
/// otherwise ignored, so a broken log never breaks a save.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry for a failed save event.
    pub fn append(&self, event: Uuid, err: &DispatchError) {
        let entry = ErrorEntry {
            timestamp: Utc::now(),
            event,
            kind: err.kind().to_string(),
            message: err.to_string(),
        };
        if let Err(io_err) = self.write_entry(&entry) {
            error!(path = %self.path.display(), %io_err, "error log write failed");
        }
    }

    fn write_entry(&self, entry: &ErrorEntry) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(entry)?;
        writeln!(file, "{line}")
    }
}
