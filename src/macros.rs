//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each one returns
//! the `Result` of the underlying logger call.
//!
//! # Examples
//!
//! ```
//! use logging_library::prelude::*;
//! use logging_library::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use logging_library::prelude::*;
/// # let logger = Logger::new();
/// use logging_library::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log several values, each rendered with the [`LogArg`](crate::LogArg) rules
/// and joined with a space.
///
/// # Examples
///
/// ```
/// # use logging_library::prelude::*;
/// # use std::sync::Arc;
/// use logging_library::log_args;
/// let capture = Arc::new(TestHandler::default());
/// let logger = Logger::builder().handler(capture.clone()).build();
///
/// log_args!(logger, LogLevel::Info, "retry", 3, None::<u8>).unwrap();
/// assert_eq!(capture.messages(), ["retry 3 undefined"]);
/// ```
#[macro_export]
macro_rules! log_args {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_args($level, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// # use logging_library::prelude::*;
/// # let logger = Logger::new();
/// use logging_library::verbose;
/// verbose!(logger, "Entering function: calculate()").unwrap();
/// verbose!(logger, "Variable value: {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Verbose, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logging_library::prelude::*;
/// # let logger = Logger::new();
/// use logging_library::warning;
/// warning!(logger, "Low disk space").unwrap();
/// warning!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use logging_library::prelude::*;
/// # let logger = Logger::new();
/// use logging_library::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
