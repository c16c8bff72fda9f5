//! Scoped logger example
//!
//! Components receive a logger and scope it to their own context. Shared
//! metadata travels with every record, and error values log their message.
//!
//! Run with: cargo run --example scoped_services

use logging_library::prelude::*;
use std::sync::Arc;

struct SomeService {
    logger: Logger,
}

impl SomeService {
    fn new(logger: &Logger) -> Self {
        Self {
            logger: logger.with_context("SomeService"),
        }
    }

    fn do_operation(&self) -> Result<()> {
        self.logger.info("Operation done.")
    }

    fn do_some_wonky_stuff(&self) -> Result<()> {
        let outcome: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "Wonky stuff failed.",
        ));
        if let Err(e) = outcome {
            self.logger.error(Message::from_error(&e))?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Logging Library - Scoped Services Example ===\n");

    let mut logger = Logger::new();
    logger
        .add_handler(Arc::new(ConsoleHandler::new(LogLevel::Debug)))
        .add_handler_if(Arc::new(StdoutHandler::new(LogLevel::Warning)), || {
            std::env::var("JSON_LOGS").is_ok()
        })
        .add_metadata([("app", "scoped_services")]);

    let service = SomeService::new(&logger);
    service.do_operation()?;
    service.do_some_wonky_stuff()?;

    println!("\nConsole output can be switched off for every handler at once:");
    ConsoleHandler::toggle(Some(false));
    logger.info("Not printed")?;
    ConsoleHandler::toggle(None);
    logger.info("Printed again")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
