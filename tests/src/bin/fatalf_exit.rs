//! Logs a formatted fatal message through a buffered sink.
#![forbid(unsafe_code)]
use std::io::{self, BufWriter};
use tests::level_from_env;
use tierlog_core::{fatalf, Logger};

fn main() {
    let mut logger = Logger::new(BufWriter::new(io::stderr()));
    logger.set_level(level_from_env());
    let free = 0;
    fatalf!(logger, "free blocks={}", free);
}
