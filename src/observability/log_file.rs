//! Size-rotated append-only log file.
//!
//! When the active file grows past its limit it is shifted to `<name>.1`,
//! existing backups move up one slot, and the oldest beyond the retention
//! count is removed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold (5 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of rotated files kept next to the active one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe line writer with size-based rotation.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<fs::File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotation, opening or writing fails, or if the
    /// internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| std::io::Error::other(format!("log file lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|metadata| metadata.len() >= self.max_bytes) {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(handle) = file.as_mut() else {
            return Err(std::io::Error::other("log file unavailable"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> std::io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingFile::new(dir.path().join("spans.jsonl"));

        log.write_line("one").unwrap();
        log.write_line("two").unwrap();

        assert_eq!(fs::read_to_string(log.path()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_when_full_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let log = RotatingFile::with_limits(path.clone(), 4, 2);

        for line in ["aaaa", "bbbb", "cccc", "dddd"] {
            log.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "dddd\n");
        assert_eq!(fs::read_to_string(log.backup_path(1)).unwrap(), "cccc\n");
        assert_eq!(fs::read_to_string(log.backup_path(2)).unwrap(), "bbbb\n");
        assert!(!log.backup_path(3).exists());
    }
}
