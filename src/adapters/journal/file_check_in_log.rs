//! File-based Check-in Log Adapter
//!
//! Appends one `Name,YYYY-MM-DD HH:MM:SS` line per check-in to a plain
//! text file. The file is created (with its parent directories) on the
//! first append.

use async_trait::async_trait;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{CheckInEntry, CheckInLog};

/// Flat-file check-in log.
#[derive(Debug, Clone)]
pub struct FileCheckInLog {
    path: PathBuf,
}

impl FileCheckInLog {
    /// Create a log writing to `path`. Nothing touches the disk until the
    /// first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> DomainError {
        DomainError::new(
            ErrorCode::StorageError,
            format!("Failed to {} {}: {}", action, self.path.display(), err),
        )
        .with_detail("path", self.path.display().to_string())
    }

    async fn ensure_parent(&self) -> Result<(), DomainError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| self.io_error("create directory for", e)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CheckInLog for FileCheckInLog {
    async fn append(&self, entry: &CheckInEntry) -> Result<(), DomainError> {
        self.ensure_parent().await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error("open", e))?;

        let line = format!("{}\n", entry.to_line());
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.io_error("write", e))?;
        file.flush().await.map_err(|e| self.io_error("flush", e))?;

        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<CheckInEntry>, DomainError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("read", e)),
        };

        let mut entries = Vec::new();
        for (index, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let line = String::from_utf8_lossy(raw);
            if line.trim().is_empty() {
                continue;
            }
            let entry = match line {
                Cow::Borrowed(line) => CheckInEntry::parse_line(line),
                // Lossy decoding replaced bytes; the name would not match.
                Cow::Owned(_) => None,
            };
            match entry {
                Some(entry) => entries.push(entry),
                None => tracing::warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    "Skipping malformed check-in log line"
                ),
            }
        }

        Ok(entries)
    }
}
