//! Minimal leveled logging over any `std::io::Write` sink.
//!
//! ```
//! use tierlog_core::{errorf, logger::{Logger, Severity}};
//!
//! let mut logger = Logger::new(Vec::new());
//! logger.trace(&[&"heartbeat"]).unwrap();
//! errorf!(logger, "count={}", 5).unwrap();
//! logger.set_level(Severity::Trace);
//! logger.trace(&[&"heartbeat"]).unwrap();
//!
//! let out = String::from_utf8(logger.into_sink()).unwrap();
//! assert_eq!(out.lines().count(), 2);
//! ```
#![forbid(unsafe_code)]
pub mod config;
pub mod logger;
pub mod time;

pub use config::{ConfigError, LoggerConfig};
pub use logger::{Logger, Severity};
