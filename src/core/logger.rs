//! Main logger implementation

use super::{
    error::Result,
    handler::Handler,
    log_arg::LogArg,
    log_level::LogLevel,
    log_record::{LogRecord, RecordOptions},
    metadata::Metadata,
};
use std::fmt;
use std::sync::Arc;

/// Context a logger gets when none is given
pub const DEFAULT_CONTEXT: &str = "Default";

/// Decides whether [`Logger::add_handler_if`] attaches its handler.
///
/// Implemented for `bool` and for closures returning `bool`; a closure is
/// evaluated once, at the time of the call.
pub trait HandlerCondition {
    fn is_met(self) -> bool;
}

impl HandlerCondition for bool {
    #[inline]
    fn is_met(self) -> bool {
        self
    }
}

impl<F: FnOnce() -> bool> HandlerCondition for F {
    #[inline]
    fn is_met(self) -> bool {
        self()
    }
}

/// Message of an error or critical log call.
///
/// Built from plain text or from an error value, in which case the error's
/// display text becomes the message. Error trait objects and boxed errors
/// convert directly; a concrete error type goes through
/// [`Message::from_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Message(err.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message(s)
    }
}

impl From<&String> for Message {
    fn from(s: &String) -> Self {
        Message(s.clone())
    }
}

impl From<&(dyn std::error::Error + 'static)> for Message {
    fn from(err: &(dyn std::error::Error + 'static)) -> Self {
        Message::from_error(err)
    }
}

impl From<&(dyn std::error::Error + Send + Sync + 'static)> for Message {
    fn from(err: &(dyn std::error::Error + Send + Sync + 'static)) -> Self {
        Message::from_error(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Message {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Message::from_error(err.as_ref())
    }
}

/// Entry point applications log through.
///
/// A logger stamps its context and a snapshot of its metadata onto every
/// record and passes the record to each attached handler, in the order the
/// handlers were added. The first handler error stops the fan-out and is
/// returned to the caller.
pub struct Logger {
    context: String,
    metadata: Arc<Metadata>,
    handlers: Vec<Arc<dyn Handler>>,
}

impl Logger {
    /// Create a logger with the [`DEFAULT_CONTEXT`] and no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(DEFAULT_CONTEXT)
    }

    #[must_use]
    pub fn with_name(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            metadata: Arc::new(Metadata::new()),
            handlers: Vec::new(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn metadata(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Create a logger scoped to `context`.
    ///
    /// The new logger gets its own copy of the handler list and of the
    /// metadata, so later changes on either side stay isolated. Handler
    /// instances themselves are shared.
    #[must_use]
    pub fn with_context(&self, context: impl Into<String>) -> Logger {
        Logger {
            context: context.into(),
            metadata: Arc::new(Metadata::clone(&self.metadata)),
            handlers: self.handlers.clone(),
        }
    }

    pub fn add_handler(&mut self, handler: Arc<dyn Handler>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Attach `handler` only when `condition` holds.
    ///
    /// # Example
    ///
    /// ```
    /// use logging_library::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let verbose = std::env::var("APP_VERBOSE").is_ok();
    /// let mut logger = Logger::new();
    /// logger
    ///     .add_handler_if(Arc::new(TestHandler::new(LogLevel::Verbose)), verbose)
    ///     .add_handler_if(Arc::new(TestHandler::default()), || cfg!(debug_assertions));
    /// ```
    pub fn add_handler_if(
        &mut self,
        handler: Arc<dyn Handler>,
        condition: impl HandlerCondition,
    ) -> &mut Self {
        if condition.is_met() {
            self.handlers.push(handler);
        }
        self
    }

    /// Merge `metadata` into the logger's metadata, last write wins per key.
    ///
    /// The merged map replaces the previous one; records created earlier keep
    /// the map they were stamped with.
    pub fn add_metadata(&mut self, metadata: impl Into<Metadata>) -> &mut Self {
        self.metadata = Arc::new(self.metadata.merged(&metadata.into()));
        self
    }

    fn record_options(&self, level: LogLevel) -> RecordOptions {
        RecordOptions {
            level,
            context: self.context.clone(),
            metadata: Arc::clone(&self.metadata),
        }
    }

    fn dispatch(&self, record: &LogRecord) -> Result<()> {
        for handler in &self.handlers {
            handler.handle(record)?;
        }
        Ok(())
    }

    /// Log raw arguments, rendered and space-joined into the message
    pub fn log_args(&self, level: LogLevel, args: &[LogArg]) -> Result<()> {
        let record = LogRecord::new(args, self.record_options(level));
        self.dispatch(&record)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        self.log_args(level, &[LogArg::Str(message.into())])
    }

    /// Log at a raw numeric level.
    ///
    /// An unknown weight fails with
    /// [`LoggerError::UnrecognizedLevel`](super::LoggerError::UnrecognizedLevel)
    /// before any handler is called.
    pub fn log_weight(&self, weight: u8, message: impl Into<String>) -> Result<()> {
        let record = LogRecord::try_new(
            weight,
            &[LogArg::Str(message.into())],
            self.context.clone(),
            Arc::clone(&self.metadata),
        )?;
        self.dispatch(&record)
    }

    #[inline]
    pub fn verbose(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Verbose, message)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(LogLevel::Warning, message)
    }

    /// Log at [`LogLevel::Error`].
    ///
    /// Pass a concrete error with [`Message::from_error`]:
    ///
    /// ```
    /// use logging_library::prelude::*;
    ///
    /// let logger = Logger::new();
    /// let err = "x".parse::<u8>().unwrap_err();
    /// logger.error(Message::from_error(&err)).unwrap();
    /// logger.error("plain text").unwrap();
    /// ```
    #[inline]
    pub fn error(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Error, message.into().into_string())
    }

    /// Log at [`LogLevel::Critical`]. Takes the same messages as [`Logger::error`].
    #[inline]
    pub fn critical(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Critical, message.into().into_string())
    }

    pub fn flush(&self) -> Result<()> {
        for handler in &self.handlers {
            handler.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("context", &self.context)
            .field("metadata", &self.metadata)
            .field(
                "handlers",
                &self.handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logging_library::prelude::*;
/// use std::sync::Arc;
///
/// let capture = Arc::new(TestHandler::default());
/// let logger = Logger::builder()
///     .context("Billing")
///     .handler(capture.clone())
///     .metadata([("region", "eu-west-1")])
///     .build();
///
/// logger.info("invoice sent").unwrap();
/// assert_eq!(capture.records()[0].context(), "Billing");
/// ```
pub struct LoggerBuilder {
    context: String,
    metadata: Metadata,
    handlers: Vec<Arc<dyn Handler>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            context: DEFAULT_CONTEXT.to_string(),
            metadata: Metadata::new(),
            handlers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler_if(mut self, handler: Arc<dyn Handler>, condition: impl HandlerCondition) -> Self {
        if condition.is_met() {
            self.handlers.push(handler);
        }
        self
    }

    /// Merge metadata, last write wins per key
    #[must_use = "builder methods return a new value"]
    pub fn metadata(mut self, metadata: impl Into<Metadata>) -> Self {
        self.metadata = self.metadata.merged(&metadata.into());
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            context: self.context,
            metadata: Arc::new(self.metadata),
            handlers: self.handlers,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
