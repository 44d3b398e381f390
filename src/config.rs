use ccr::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Quiet unless asked otherwise: `RUST_LOG=debug` traces how the response was built.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Installs the stderr logger, so stdout carries nothing but the response line
pub fn configure_logging() -> Result {
    SimpleLogger::new()
        .with_level(DEFAULT_LEVEL)
        .env()
        .init()?;

    return Ok(());
}
