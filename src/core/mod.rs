//! Core logger types and traits

pub mod error;
pub mod handler;
pub mod log_arg;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metadata;

pub use error::{LoggerError, Result};
pub use handler::{Handler, LevelFilter};
pub use log_arg::LogArg;
pub use log_level::LogLevel;
pub use log_record::{LogRecord, RecordOptions};
pub use logger::{HandlerCondition, Logger, LoggerBuilder, Message, DEFAULT_CONTEXT};
pub use metadata::Metadata;
