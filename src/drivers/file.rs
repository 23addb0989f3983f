//! Shared file handling for the file-backed drivers

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// An append-mode log file guarded by a lock.
///
/// Every write and the close take the same lock, so concurrent callers never
/// interleave partial records. After [`LogFile::close`] the handle is gone
/// and writes fail with [`LoggerError::DriverClosed`].
pub(crate) struct LogFile {
    path: PathBuf,
    driver: &'static str,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl LogFile {
    /// Open `path` for appending, creating it and any missing parent
    /// directories.
    pub(crate) fn open(path: impl Into<PathBuf>, driver: &'static str) -> Result<Self> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    format!("cannot create '{}'", dir.display()),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            driver,
            writer: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Render one record into a buffer, then append it under the lock and
    /// flush.
    ///
    /// A record that fails to render writes nothing. If the append or flush
    /// fails, bytes still buffered from that record are discarded so the
    /// next record starts on a clean line.
    pub(crate) fn write_record<F>(&self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut record = Vec::with_capacity(256);
        render(&mut record)?;

        let mut guard = self.writer.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| LoggerError::driver_closed(self.driver))?;

        if let Err(e) = writer.write_all(&record).and_then(|()| writer.flush()) {
            if let Some(failed) = guard.take() {
                let (file, _unwritten) = failed.into_parts();
                *guard = Some(BufWriter::new(file));
            }
            return Err(LoggerError::io_operation(
                "writing log entry",
                format!("cannot write to '{}'", self.path.display()),
                e,
            ));
        }
        Ok(())
    }

    /// Flush and release the handle. Closing twice is a no-op.
    pub(crate) fn close(&self) -> Result<()> {
        let mut guard = self.writer.lock();
        match guard.take() {
            Some(mut writer) => {
                writer.flush()?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.writer.lock().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_directories() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("deeper").join("app.log");

        let file = LogFile::open(&path, "text_file")?;
        assert!(path.exists());
        assert_eq!(file.path(), path.as_path());
        Ok(())
    }

    #[test]
    fn test_write_after_close_fails() -> Result<()> {
        let dir = tempdir()?;
        let file = LogFile::open(dir.path().join("app.log"), "text_file")?;

        file.write_record(|buf| {
            buf.extend_from_slice(b"first\n");
            Ok(())
        })?;
        file.close()?;
        file.close()?;
        assert!(file.is_closed());

        let err = file
            .write_record(|buf| {
                buf.extend_from_slice(b"second\n");
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, LoggerError::DriverClosed { .. }));

        let content = fs::read_to_string(dir.path().join("app.log"))?;
        assert_eq!(content, "first\n");
        Ok(())
    }

    #[test]
    fn test_appends_to_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n")?;

        let file = LogFile::open(&path, "text_file")?;
        file.write_record(|buf| {
            buf.extend_from_slice(b"appended\n");
            Ok(())
        })?;

        assert_eq!(fs::read_to_string(&path)?, "existing\nappended\n");
        Ok(())
    }

    #[test]
    fn test_failed_render_leaves_no_partial_line() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");
        let file = LogFile::open(&path, "json_file")?;

        let err = file
            .write_record(|buf| {
                buf.extend_from_slice(b"{\"message\":\"half");
                Err(LoggerError::other("render failed"))
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "render failed");

        file.write_record(|buf| {
            buf.extend_from_slice(b"whole\n");
            Ok(())
        })?;

        assert_eq!(fs::read_to_string(&path)?, "whole\n");
        Ok(())
    }
}
