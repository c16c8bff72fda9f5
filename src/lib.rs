//! # Logging Library
//!
//! A structured application-logging facade. Application code logs through a
//! [`Logger`]; the logger turns every call into one immutable [`LogRecord`]
//! and hands it to each attached [`Handler`] in the order they were added.
//!
//! ## Features
//!
//! - **Contextual loggers**: [`Logger::with_context`] scopes a copy of a logger
//!   to a component while sharing its handlers
//! - **Metadata inheritance**: key-value data merged on the logger is
//!   snapshotted into every record
//! - **Level filtering**: handlers accept a threshold or an exact set of levels
//! - **Pluggable handlers**: console, JSON file, stdout and an in-memory test
//!   handler; custom sinks implement [`Handler::write`]
//!
//! ```
//! use logging_library::prelude::*;
//! use std::sync::Arc;
//!
//! let capture = Arc::new(TestHandler::new(LogLevel::Info));
//! let mut logger = Logger::new();
//! logger
//!     .add_handler(capture.clone())
//!     .add_metadata([("service", "checkout")]);
//!
//! let payments = logger.with_context("Payments");
//! payments.debug("not captured").unwrap();
//! payments.info("charge accepted").unwrap();
//!
//! let records = capture.records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].context(), "Payments");
//! assert_eq!(records[0].metadata().get("service").unwrap(), "checkout");
//! ```

pub mod core;
pub mod handlers;
pub mod macros;
pub mod registry;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::handlers::ConsoleHandler;
    #[cfg(feature = "file")]
    pub use crate::handlers::{FileHandler, FileHandlerOptions};
    pub use crate::handlers::{StdoutHandler, TestHandler};
    pub use crate::core::{
        Handler, HandlerCondition, LevelFilter, LogArg, LogLevel, LogRecord, Logger,
        LoggerBuilder, LoggerError, Message, Metadata, RecordOptions, Result, DEFAULT_CONTEXT,
    };
}

#[cfg(feature = "console")]
pub use handlers::ConsoleHandler;
#[cfg(feature = "file")]
pub use handlers::FileHandler;
pub use handlers::{StdoutHandler, TestHandler};
pub use crate::core::{
    Handler, HandlerCondition, LevelFilter, LogArg, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerError, Message, Metadata, RecordOptions, Result, DEFAULT_CONTEXT,
};
pub use registry::{get_logger, set_logger_assignment, CoreLogger, LoggerStore};
