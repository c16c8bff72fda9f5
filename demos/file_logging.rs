//! File logging example
//!
//! Writes JSON lines to one file and plain text to another.
//!
//! Run with: cargo run --example file_logging

use logging_library::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Logging Library - File Logging Example ===\n");

    let mut logger = Logger::with_name("Worker");
    logger
        .add_handler(Arc::new(FileHandler::open(LogLevel::Debug, "application.jsonl")?))
        .add_handler(Arc::new(FileHandler::new(
            LogLevel::Warning,
            FileHandlerOptions::new("problems.log").with_format(|r| {
                format!("{} {} [{}] {}", r.timestamp().to_rfc3339(), r.level_name(), r.context(), r.message())
            }),
        )?))
        .add_metadata([("pid", std::process::id())]);

    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warning("Using default settings for some options")?;

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            logger.warning("Item 3 took longer than expected")?;
        }
    }

    logger.error("Failed to load optional plugin")?;
    logger.flush()?;

    println!("=== Example completed successfully! ===");
    println!("Check 'application.jsonl' and 'problems.log' for the output");

    Ok(())
}
