//! Logs an error and then a fatal message to stderr.
#![forbid(unsafe_code)]
use std::io;
use tests::level_from_env;
use tierlog_core::{error, fatal, Logger};

fn main() -> io::Result<()> {
    let mut logger = Logger::new(io::stderr());
    logger.set_level(level_from_env());
    error!(logger, "pump", 2, "stalled")?;
    fatal!(logger, "disk full")
}
