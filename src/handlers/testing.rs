//! In-memory handler for tests

use crate::core::{Handler, LevelFilter, LogLevel, LogRecord, Result};
use parking_lot::Mutex;

/// Collects accepted records in memory instead of printing them, so tests
/// can assert on what was logged.
///
/// Defaults to accepting every level.
///
/// # Examples
///
/// ```
/// use logging_library::prelude::*;
/// use std::sync::Arc;
///
/// let capture = Arc::new(TestHandler::default());
/// let mut logger = Logger::new();
/// logger.add_handler(capture.clone());
///
/// logger.warning("disk low").unwrap();
/// assert_eq!(capture.messages(), ["disk low"]);
/// ```
#[derive(Debug)]
pub struct TestHandler {
    level: LevelFilter,
    records: Mutex<Vec<LogRecord>>,
}

impl TestHandler {
    pub fn new(level: impl Into<LevelFilter>) -> Self {
        Self {
            level: level.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the records handled so far, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for TestHandler {
    fn default() -> Self {
        Self::new(LogLevel::Verbose)
    }
}

impl Handler for TestHandler {
    fn level(&self) -> &LevelFilter {
        &self.level
    }

    fn write(&self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "test"
    }
}
