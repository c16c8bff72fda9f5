//! Handler trait for log record destinations

use super::{error::Result, log_level::LogLevel, log_record::LogRecord};
use std::collections::BTreeSet;

/// Which records a handler accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelFilter {
    /// Accept records at this level or above
    Threshold(LogLevel),
    /// Accept records whose level is a member; no ordering is implied
    Only(BTreeSet<LogLevel>),
}

impl LevelFilter {
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        match self {
            LevelFilter::Threshold(min) => level >= *min,
            LevelFilter::Only(levels) => levels.contains(&level),
        }
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        LevelFilter::Threshold(LogLevel::Verbose)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::Threshold(level)
    }
}

impl<const N: usize> From<[LogLevel; N]> for LevelFilter {
    fn from(levels: [LogLevel; N]) -> Self {
        levels.into_iter().collect()
    }
}

impl From<Vec<LogLevel>> for LevelFilter {
    fn from(levels: Vec<LogLevel>) -> Self {
        levels.into_iter().collect()
    }
}

impl FromIterator<LogLevel> for LevelFilter {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        LevelFilter::Only(iter.into_iter().collect())
    }
}

/// A destination for log records.
///
/// Implementors supply [`Handler::write`]; loggers call [`Handler::handle`],
/// which applies the level filter first and only forwards accepted records.
/// Handlers may be attached to several loggers at once, so all methods take
/// `&self`.
pub trait Handler: Send + Sync {
    fn level(&self) -> &LevelFilter;

    /// Sink-specific output for an already accepted record
    fn write(&self, record: &LogRecord) -> Result<()>;

    fn handle(&self, record: &LogRecord) -> Result<()> {
        if !self.level().accepts(record.level()) {
            return Ok(());
        }
        self.write(record)
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
