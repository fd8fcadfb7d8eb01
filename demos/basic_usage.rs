//! Basic logger usage example
//!
//! Demonstrates level filtering, derived loggers and call fields, all
//! written as JSON lines to stdout.
//!
//! Run with: cargo run --example basic_usage

use rust_service_logger::prelude::*;
use rust_service_logger::info;
use std::time::Duration;

fn main() -> Result<()> {
    // The entry point decides where records go
    let logger = Logger::new(
        "checkout",
        [with_level("debug"), with_output(OutputSink::stdout())],
    );

    logger.debug("starting up", &[]);
    logger.info("listening", &[field("port", 8080)]);

    let request = logger
        .with_correlation_id("c0ffee")
        .with_fields([field("user_id", 42), field("cart_items", 3)]);
    request.info("cart loaded", &[field("took", Duration::from_millis(12))]);
    request.warn("inventory low", &[field("sku", "A-113")]);

    let payments = request.named("payments");
    info!(payments, fields: [field("amount_cents", 1299)], "charging card ending {}", 4242);

    let quiet = Logger::new("checkout", [with_level("ERROR")]);
    quiet.info("this line is filtered out", &[]);
    quiet.error("only errors get through", &[]);

    let tagged = logger.with_hostname()?;
    tagged.info("shutting down", &[]);

    logger.flush()
}
