//! Basic logger usage example
//!
//! Demonstrates console logging at every level, level filtering, and a
//! colored custom line format.
//!
//! Run with: cargo run --example basic_usage

use colored::Colorize;
use logging_library::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Logging Library - Basic Usage Example ===\n");

    // Console handler that accepts everything
    let mut logger = Logger::new();
    logger.add_handler(Arc::new(ConsoleHandler::new(LogLevel::Verbose)));

    println!("1. Logging at different levels:");
    logger.verbose("This is a verbose message")?;
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.critical("This is a critical message")?;

    println!("\n2. Handlers filter on their own level:");
    let mut filtered = Logger::new();
    filtered.add_handler(Arc::new(ConsoleHandler::new(LogLevel::Info)));
    println!("   Handler level set to INFO - verbose and debug won't show:");
    filtered.verbose("Verbose message (hidden)")?;
    filtered.debug("Debug message (hidden)")?;
    filtered.info("Info message (visible)")?;
    filtered.warning("Warning message (visible)")?;

    println!("\n3. Only selected levels:");
    let mut picky = Logger::new();
    picky.add_handler(Arc::new(ConsoleHandler::new([LogLevel::Debug, LogLevel::Error])));
    picky.info("Info message (hidden)")?;
    picky.debug("Debug message (visible)")?;
    picky.error("Error message (visible)")?;

    println!("\n4. Custom colored format:");
    let mut pretty = Logger::new();
    pretty.add_handler(Arc::new(ConsoleHandler::new(LogLevel::Debug).with_format(
        |r| {
            format!(
                "{}\t- {}: {}",
                r.level_name().bold().blue(),
                r.context().red(),
                r.message()
            )
        },
    )));
    pretty.info("This output will appear colored in the console. :D")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
