//! Basic logger usage example
//!
//! Demonstrates call-site aware logging to the console with level gating,
//! structured arguments, and cycle-safe rendering.
//!
//! Run with: cargo run --example basic_usage

use stacklog::prelude::*;
use stacklog::{info, stacklog, warning};

fn main() -> Result<()> {
    println!("=== stacklog - Basic Usage Example ===\n");

    // Create a logger that routes records to the console
    let logger = Logger::builder()
        .min_level(LogLevel::Trace)
        .sink(ConsoleSink::new())
        .build();

    // Log messages at different levels; each record names the file and
    // line it was emitted from, plus the caller when one is visible
    println!("1. Logging at different levels:");
    logger.trace(&[LogValue::from("This is a trace message")])?;
    logger.debug(&[LogValue::from("This is a debug message")])?;
    logger.info(&[LogValue::from("This is an info message")])?;
    logger.warning(&[LogValue::from("This is a warning message")])?;
    logger.error(&[LogValue::from("This is an error message")])?;
    logger.fatal(&[LogValue::from("This is a fatal message")])?;

    println!("\n2. Reconfiguring the gate and the bare-call level:");
    logger.setup(LogLevel::Info, None);
    println!("   Minimum level set to INFO - trace and debug won't show:");
    logger.trace(&[LogValue::from("Trace message (hidden)")])?;
    logger.debug(&[LogValue::from("Debug message (hidden)")])?;
    stacklog!(logger, "Bare call dispatched at the default level")?;

    println!("\n3. Mixing scalars and structured arguments:");
    info!(logger, "Request handled", 200, true)?;
    info!(
        logger,
        "Session state",
        LogValue::object([
            ("user", LogValue::from("alice")),
            ("hits", LogValue::from(7)),
        ])
    )?;

    println!("\n4. Self-referential values render without looping:");
    let session = LogValue::object([("name", LogValue::from("root"))]);
    if let Some(handle) = session.as_object_handle() {
        handle.write().push(("me".to_string(), session.clone()));
    }
    warning!(logger, "Cyclic session detected", session)?;

    logger.flush()?;

    println!("\n5. Diagnostics counters:");
    let metrics = logger.metrics();
    println!("   Logged:     {}", metrics.total_logged());
    println!("   Suppressed: {}", metrics.suppressed_count());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
