//! Process-wide logger lookup
//!
//! Library code asks for a logger by identifier with [`get_logger`] and never
//! needs to know how the application configured logging. The application
//! installs one assignment function with [`set_logger_assignment`]; until it
//! does, lookups resolve to [`ConsoleFallback`].
//!
//! [`LoggerStore`] is a separate keyed map for applications that prefer to
//! register fully built loggers up front.

use crate::core::Logger;
use parking_lot::{const_rwlock, RwLock};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The minimal logging surface handed out by [`get_logger`].
///
/// Calls are fire-and-forget: implementations report their own failures.
pub trait CoreLogger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Resolves an identifier to a logger
pub type LoggerAssignment = Arc<dyn Fn(Option<&str>) -> Arc<dyn CoreLogger> + Send + Sync>;

static ASSIGNMENT: RwLock<Option<LoggerAssignment>> = const_rwlock(None);

/// Logger used when no assignment is installed. Prints plain lines, warnings
/// and errors to stderr, the rest to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFallback;

impl CoreLogger for ConsoleFallback {
    fn debug(&self, message: &str) {
        println!("{}", message);
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

fn report(operation: &str, result: crate::core::Result<()>) {
    if let Err(e) = result {
        eprintln!("[LOGGER ERROR] {} failed: {}", operation, e);
    }
}

impl CoreLogger for Logger {
    fn debug(&self, message: &str) {
        report("debug", Logger::debug(self, message));
    }

    fn info(&self, message: &str) {
        report("info", Logger::info(self, message));
    }

    fn warn(&self, message: &str) {
        report("warning", Logger::warning(self, message));
    }

    fn error(&self, message: &str) {
        report("error", Logger::error(self, message));
    }
}

/// Resolve the logger for `id`.
///
/// Calls the installed assignment every time, or returns a
/// [`ConsoleFallback`] when none is installed.
///
/// # Example
///
/// ```
/// use logging_library::registry::{clear_logger_assignment, get_logger, set_logger_assignment, CoreLogger};
/// use logging_library::prelude::*;
/// use std::sync::Arc;
///
/// let capture = Arc::new(TestHandler::default());
/// let root = Logger::builder().handler(capture.clone()).build();
///
/// set_logger_assignment(move |id| -> Arc<dyn CoreLogger> {
///     Arc::new(root.with_context(id.unwrap_or("default")))
/// });
///
/// get_logger(Some("http")).info("listening");
/// assert_eq!(capture.records()[0].context(), "http");
/// # clear_logger_assignment();
/// ```
pub fn get_logger(id: Option<&str>) -> Arc<dyn CoreLogger> {
    // Clone out of the slot so the assignment runs without the lock held.
    let assignment = ASSIGNMENT.read().clone();
    match assignment {
        Some(assign) => assign(id),
        None => Arc::new(ConsoleFallback),
    }
}

/// Install the function [`get_logger`] resolves identifiers with, replacing
/// any previous one.
pub fn set_logger_assignment<F>(assignment: F)
where
    F: Fn(Option<&str>) -> Arc<dyn CoreLogger> + Send + Sync + 'static,
{
    *ASSIGNMENT.write() = Some(Arc::new(assignment));
}

/// Remove the installed assignment, restoring the fallback.
pub fn clear_logger_assignment() {
    *ASSIGNMENT.write() = None;
}

static STORE: RwLock<BTreeMap<String, Arc<Logger>>> = const_rwlock(BTreeMap::new());

/// Process-wide map of named loggers.
pub struct LoggerStore;

impl LoggerStore {
    pub fn get(key: &str) -> Option<Arc<Logger>> {
        STORE.read().get(key).cloned()
    }

    /// Register `logger` under `key`, replacing any previous entry.
    pub fn add(key: impl Into<String>, logger: impl Into<Arc<Logger>>) {
        STORE.write().insert(key.into(), logger.into());
    }

    /// Returns `true` if a logger was registered under `key`.
    pub fn remove(key: &str) -> bool {
        STORE.write().remove(key).is_some()
    }
}
