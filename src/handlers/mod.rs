//! Handler implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod stdout;
pub mod testing;

#[cfg(feature = "console")]
pub use console::{ConsoleChannel, ConsoleHandler, ConsoleOutput, ConsoleSwitch, StdConsole};
#[cfg(feature = "file")]
pub use file::{FileHandler, FileHandlerOptions};
pub use stdout::StdoutHandler;
pub use testing::TestHandler;

pub use crate::core::Handler;
