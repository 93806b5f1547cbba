//! Append-only capture log for video file_ids
//!
//! Every accepted admin upload appends one `name: file_id` line. The file
//! is the hand-off point for curating responses.json: find the line for
//! the uploaded clip and paste its file_id into a video card.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::error::AppResult;

/// File-backed log of captured file_ids.
#[derive(Debug, Clone)]
pub struct UploadLog {
    path: PathBuf,
}

impl UploadLog {
    /// Creates a log handle for the given path. The file itself appears on
    /// the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the log appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one `name: file_id` line.
    ///
    /// Uploads without a filename are recorded under the `no_name` marker
    /// so the line format stays greppable.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened or written.
    pub fn append(&self, file_name: Option<&str>, file_id: &str) -> AppResult<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}: {}", file_name.unwrap_or(NO_NAME_MARKER), file_id)?;
        Ok(())
    }
}

/// Stand-in written when Telegram reports no filename for the video.
pub const NO_NAME_MARKER: &str = "no_name";
