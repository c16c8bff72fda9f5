//! Console handler implementation

use crate::core::{Handler, LevelFilter, LogLevel, LogRecord, Result};
use colored::Colorize;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Formatting function applied to every accepted record
pub type ConsoleFormat = Arc<dyn Fn(&LogRecord) -> String + Send + Sync>;

/// `LEVEL: [context] - message`
pub fn default_format(record: &LogRecord) -> String {
    format!(
        "{}: [{}] - {}",
        record.level_name(),
        record.context(),
        record.message()
    )
}

/// Console stream a record is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleChannel {
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleChannel {
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Verbose | LogLevel::Debug => ConsoleChannel::Debug,
            LogLevel::Info => ConsoleChannel::Info,
            LogLevel::Warning => ConsoleChannel::Warn,
            LogLevel::Error | LogLevel::Critical => ConsoleChannel::Error,
        }
    }

    /// Warnings and errors go to stderr
    pub fn is_stderr(self) -> bool {
        matches!(self, ConsoleChannel::Warn | ConsoleChannel::Error)
    }
}

/// Where console lines end up.
pub trait ConsoleOutput: Send + Sync {
    fn write_line(&self, channel: ConsoleChannel, level: LogLevel, line: &str) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Process stdout/stderr. The warn and error channels go to stderr, the rest
/// to stdout.
#[derive(Debug, Clone, Default)]
pub struct StdConsole {
    use_colors: bool,
}

impl StdConsole {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl ConsoleOutput for StdConsole {
    fn write_line(&self, channel: ConsoleChannel, level: LogLevel, line: &str) -> Result<()> {
        let line = if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        };

        if channel.is_stderr() {
            writeln!(std::io::stderr().lock(), "{}", line)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}

/// Shared on/off flag for console handlers.
///
/// Every [`ConsoleHandler`] holds a switch. Unless one is injected with
/// [`ConsoleHandler::with_switch`], handlers share the process-wide switch
/// returned by [`ConsoleSwitch::process`], so flipping it silences all of them
/// at once.
#[derive(Debug, Clone)]
pub struct ConsoleSwitch {
    enabled: Arc<AtomicBool>,
}

impl ConsoleSwitch {
    /// A fresh, enabled switch not shared with anyone yet
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// The switch shared by every console handler of this process
    pub fn process() -> ConsoleSwitch {
        static PROCESS: OnceLock<ConsoleSwitch> = OnceLock::new();
        PROCESS.get_or_init(ConsoleSwitch::new).clone()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Set the flag to `enabled`, or invert it when `None`. Returns the new state.
    pub fn toggle(&self, enabled: Option<bool>) -> bool {
        match enabled {
            Some(enabled) => {
                self.set(enabled);
                enabled
            }
            None => !self.enabled.fetch_xor(true, Ordering::Relaxed),
        }
    }
}

impl Default for ConsoleSwitch {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes records to the console, one formatted line per record.
///
/// # Example
///
/// ```
/// use logging_library::handlers::ConsoleHandler;
/// use logging_library::LogLevel;
///
/// let handler = ConsoleHandler::new(LogLevel::Debug)
///     .with_colors(true)
///     .with_format(|record| format!("{} | {}", record.level_name(), record.message()));
/// ```
pub struct ConsoleHandler {
    level: LevelFilter,
    format: ConsoleFormat,
    output: Arc<dyn ConsoleOutput>,
    switch: ConsoleSwitch,
}

impl ConsoleHandler {
    pub fn new(level: impl Into<LevelFilter>) -> Self {
        Self {
            level: level.into(),
            format: Arc::new(default_format),
            output: Arc::new(StdConsole::default()),
            switch: ConsoleSwitch::process(),
        }
    }

    /// Replace the line format entirely
    #[must_use]
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&LogRecord) -> String + Send + Sync + 'static,
    {
        self.format = Arc::new(format);
        self
    }

    /// Color whole lines by level on the process console
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.output = Arc::new(StdConsole::new(use_colors));
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl ConsoleOutput + 'static) -> Self {
        self.output = Arc::new(output);
        self
    }

    #[must_use]
    pub fn with_switch(mut self, switch: ConsoleSwitch) -> Self {
        self.switch = switch;
        self
    }

    pub fn switch(&self) -> &ConsoleSwitch {
        &self.switch
    }

    /// Turn every handler on the process-wide switch on or off.
    ///
    /// `None` inverts the current state. Returns the new state.
    pub fn toggle(enabled: Option<bool>) -> bool {
        ConsoleSwitch::process().toggle(enabled)
    }
}

impl Handler for ConsoleHandler {
    fn level(&self) -> &LevelFilter {
        &self.level
    }

    fn write(&self, record: &LogRecord) -> Result<()> {
        if !self.switch.is_enabled() {
            return Ok(());
        }

        let line = (self.format)(record);
        self.output
            .write_line(ConsoleChannel::for_level(record.level()), record.level(), &line)
    }

    fn flush(&self) -> Result<()> {
        self.output.flush()
    }

    fn name(&self) -> &str {
        "console"
    }
}

impl fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("level", &self.level)
            .field("enabled", &self.switch.is_enabled())
            .finish_non_exhaustive()
    }
}
