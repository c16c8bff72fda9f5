//! Stdout handler implementation

use crate::core::{Handler, LevelFilter, LogRecord, Result};
use std::io::Write;

/// Writes each accepted record to stdout as a single JSON line.
#[derive(Debug, Clone, Default)]
pub struct StdoutHandler {
    level: LevelFilter,
}

impl StdoutHandler {
    pub fn new(level: impl Into<LevelFilter>) -> Self {
        Self {
            level: level.into(),
        }
    }
}

impl Handler for StdoutHandler {
    fn level(&self) -> &LevelFilter {
        &self.level
    }

    fn write(&self, record: &LogRecord) -> Result<()> {
        let json = record.to_json()?;
        writeln!(std::io::stdout().lock(), "{}", json)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
