//! Append-only trace file with size-capped numbered backups.
//!
//! When the live file would grow past its limit it is shifted to `<file>.1`,
//! the previous `.1` to `.2`, and so on. The oldest backup past the retention
//! count is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the live trace file is rotated (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const MAX_BACKUP_FILES: usize = 3;

#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of backup number `n`, starting at 1 for the newest.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "trace file lock poisoned"))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map_or(0, |m| m.len());
        if current > 0 && current + incoming > self.max_bytes {
            // Close before renaming so the next write reopens a fresh file.
            *guard = None;
            self.shift_backups()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *guard = Some(file);
        }

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn shift_backups(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"));

        file.append_line("one").unwrap();
        file.append_line("two").unwrap();

        assert_eq!(read(file.path()), "one\ntwo\n");
        assert!(!file.backup_path(1).exists());
    }

    #[test]
    fn rotates_when_limit_would_be_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 3);

        file.append_line("aaaa").unwrap();
        file.append_line("bbbb").unwrap();

        assert_eq!(read(file.path()), "bbbb\n");
        assert_eq!(read(&file.backup_path(1)), "aaaa\n");
    }

    #[test]
    fn keeps_only_configured_backups() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 2);

        for line in ["1111", "2222", "3333", "4444"] {
            file.append_line(line).unwrap();
        }

        assert_eq!(read(file.path()), "4444\n");
        assert_eq!(read(&file.backup_path(1)), "3333\n");
        assert_eq!(read(&file.backup_path(2)), "2222\n");
        assert!(!file.backup_path(3).exists());
    }

    #[test]
    fn oversized_first_line_is_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 2, 1);

        file.append_line("longer than limit").unwrap();
        assert_eq!(read(file.path()), "longer than limit\n");
    }
}
