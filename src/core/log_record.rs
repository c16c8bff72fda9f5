//! Log record structure

use super::error::Result;
use super::log_arg::{join_args, LogArg};
use super::log_level::LogLevel;
use super::metadata::Metadata;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Construction inputs a logger stamps onto every record.
#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub level: LogLevel,
    pub context: String,
    pub metadata: Arc<Metadata>,
}

impl RecordOptions {
    pub fn new(level: LogLevel, context: impl Into<String>) -> Self {
        Self {
            level,
            context: context.into(),
            metadata: Arc::new(Metadata::new()),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: impl Into<Arc<Metadata>>) -> Self {
        self.metadata = metadata.into();
        self
    }
}

/// An immutable log record, created once per log call.
///
/// Serializes as
/// `{"level":20,"levelName":"INFO","context":..,"message":..,"timestamp":..,"metadata":{..}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    level: LogLevel,
    level_name: &'static str,
    context: String,
    message: String,
    timestamp: DateTime<Utc>,
    metadata: Arc<Metadata>,
}

impl LogRecord {
    pub fn new(args: &[LogArg], options: RecordOptions) -> Self {
        Self {
            level: options.level,
            level_name: options.level.to_str(),
            context: options.context,
            message: join_args(args),
            timestamp: Utc::now(),
            metadata: options.metadata,
        }
    }

    /// Build a record from a raw numeric level.
    ///
    /// The weight is validated before anything else happens, so an unknown
    /// level never yields a record.
    pub fn try_new(
        weight: u8,
        args: &[LogArg],
        context: impl Into<String>,
        metadata: Arc<Metadata>,
    ) -> Result<Self> {
        let level = LogLevel::try_from(weight)?;
        Ok(Self::new(
            args,
            RecordOptions::new(level, context).with_metadata(metadata),
        ))
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn level_name(&self) -> &'static str {
        self.level_name
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The shared snapshot this record was stamped with
    pub fn metadata_snapshot(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    /// Single-line JSON rendering
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
