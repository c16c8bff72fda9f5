//! File handler implementation

use crate::core::{Handler, LevelFilter, LogRecord, LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Line format for file output; the default is the record's JSON
pub type FileFormat = Arc<dyn Fn(&LogRecord) -> String + Send + Sync>;

/// Configuration for [`FileHandler`]
#[derive(Clone)]
pub struct FileHandlerOptions {
    pub path: PathBuf,
    pub format: Option<FileFormat>,
}

impl FileHandlerOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    #[must_use]
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&LogRecord) -> String + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }
}

impl fmt::Debug for FileHandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandlerOptions")
            .field("path", &self.path)
            .field("custom_format", &self.format.is_some())
            .finish()
    }
}

/// Appends one line per accepted record to a file.
///
/// The file is opened once in append mode and stays open for the lifetime of
/// the handler. Every line is flushed right away so a failing disk is
/// reported to the log call that hit it.
///
/// # Examples
///
/// ```no_run
/// use logging_library::handlers::{FileHandler, FileHandlerOptions};
/// use logging_library::LogLevel;
///
/// let handler = FileHandler::new(LogLevel::Info, FileHandlerOptions::new("/var/log/app.jsonl"))
///     .unwrap();
/// ```
pub struct FileHandler {
    level: LevelFilter,
    path: PathBuf,
    format: Option<FileFormat>,
    writer: Mutex<BufWriter<File>>,
}

impl FileHandler {
    pub fn new(level: impl Into<LevelFilter>, options: FileHandlerOptions) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&options.path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", options.path.display()),
                    e,
                )
            })?;

        Ok(Self {
            level: level.into(),
            path: options.path,
            format: options.format,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Shorthand for a JSON-lines handler on `path`
    pub fn open(level: impl Into<LevelFilter>, path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(level, FileHandlerOptions::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(&self, record: &LogRecord) -> Result<String> {
        match &self.format {
            Some(format) => Ok(format(record)),
            None => record.to_json(),
        }
    }
}

impl Handler for FileHandler {
    fn level(&self) -> &LevelFilter {
        &self.level
    }

    fn write(&self, record: &LogRecord) -> Result<()> {
        let mut line = self.format_line(record)?;
        line.push('\n');

        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl fmt::Debug for FileHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandler")
            .field("level", &self.level)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Drop for FileHandler {
    fn drop(&mut self) {
        if let Err(e) = self.writer.get_mut().flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush '{}' on drop: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, Metadata, RecordOptions};
    use std::fs;
    use tempfile::tempdir;

    fn record(level: LogLevel, message: &str) -> LogRecord {
        let options =
            RecordOptions::new(level, "Files").with_metadata(Metadata::from([("attempt", 1)]));
        LogRecord::new(&[message.into()], options)
    }

    #[test]
    fn test_file_handler_writes_json_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.jsonl");
        let handler = FileHandler::open(LogLevel::Info, &log_path)?;

        handler.handle(&record(LogLevel::Info, "first"))?;
        handler.handle(&record(LogLevel::Debug, "filtered"))?;
        handler.handle(&record(LogLevel::Error, "second"))?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(content.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(lines[1])?;
        assert_eq!(parsed["message"], "second");
        assert_eq!(parsed["levelName"], "ERROR");
        assert_eq!(parsed["context"], "Files");
        assert_eq!(parsed["metadata"]["attempt"], 1);

        Ok(())
    }

    #[test]
    fn test_file_handler_appends_to_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("existing.jsonl");
        fs::write(&log_path, "previous line\n")?;

        {
            let handler = FileHandler::open(LogLevel::Verbose, &log_path)?;
            handler.handle(&record(LogLevel::Info, "appended"))?;
        }

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "previous line");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("appended"));

        Ok(())
    }

    #[test]
    fn test_file_handler_custom_format() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("plain.log");
        let options = FileHandlerOptions::new(&log_path)
            .with_format(|r| format!("{} {}", r.level_name(), r.message()));
        let handler = FileHandler::new(LogLevel::Verbose, options)?;

        handler.handle(&record(LogLevel::Warning, "disk low"))?;

        assert_eq!(fs::read_to_string(&log_path)?, "WARNING disk low\n");
        Ok(())
    }

    #[test]
    fn test_file_handler_reports_open_failure() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing").join("app.log");

        let err = FileHandler::open(LogLevel::Info, &missing).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains(&missing.display().to_string()));
    }
}
