//! Leveled logger over an arbitrary [`Write`] sink.
//!
//! One method per severity gates the message against the configured level,
//! formats a single line and writes it to the sink. The `*f` variants take
//! [`format_args!`] output and hand it to their plain counterpart unchanged,
//! so gating and side effects are shared. [`Logger::fatal`] and
//! [`Logger::fatalf`] exit the process after writing.
//!
//! Emission takes `&mut self`. A logger shared between threads has to be
//! wrapped by the caller, e.g. in a `Mutex`.
mod print;
mod severity;

pub use print::{sprint, Plain, Printable};
pub use severity::{Severity, SeverityParseError};

use crate::config::LoggerConfig;
use crate::time::TimeStamp;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::panic::Location;
use std::process;

/// Exit status used by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// How much metadata precedes the message on a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Detail {
    /// Timestamp and `file:line:` of the call site.
    Full,
    /// Timestamp only.
    Reduced,
}

pub struct Logger<W: Write> {
    level: Severity,
    sink: W,
}

impl<W: Write> Logger<W> {
    /// Logger writing to `sink` at [`Severity::Info`].
    pub fn new(sink: W) -> Self {
        Logger {
            level: Severity::Info,
            sink,
        }
    }

    pub fn with_config(sink: W, config: &LoggerConfig) -> Self {
        let mut logger = Logger::new(sink);
        logger.set_level(config.level);
        logger
    }

    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Would a message of `severity` be written at the current level?
    pub fn enabled(&self, severity: Severity) -> bool {
        self.level.enables(severity)
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    #[track_caller]
    pub fn trace(&mut self, args: &[&dyn Printable]) -> io::Result<()> {
        if self.enabled(Severity::Trace) {
            self.output(Severity::Trace, Detail::Full, Location::caller(), args)?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn tracef(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.trace(&[&args])
    }

    /// Info lines only carry the call site when trace output is enabled too.
    #[track_caller]
    pub fn info(&mut self, args: &[&dyn Printable]) -> io::Result<()> {
        if self.enabled(Severity::Info) {
            let detail = if self.level > Severity::Info {
                Detail::Full
            } else {
                Detail::Reduced
            };
            self.output(Severity::Info, detail, Location::caller(), args)?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn infof(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.info(&[&args])
    }

    #[track_caller]
    pub fn error(&mut self, args: &[&dyn Printable]) -> io::Result<()> {
        if self.enabled(Severity::Error) {
            self.output(Severity::Error, Detail::Full, Location::caller(), args)?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn errorf(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.error(&[&args])
    }

    /// Writes the message, flushes the sink and exits with [`FATAL_EXIT_CODE`].
    ///
    /// Every level enables fatal output, so this never returns. Write errors
    /// are dropped since the process is going away regardless.
    #[track_caller]
    pub fn fatal(&mut self, args: &[&dyn Printable]) -> ! {
        let _ = self.output(Severity::Fatal, Detail::Full, Location::caller(), args);
        let _ = self.sink.flush();
        process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    pub fn fatalf(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(&[&args])
    }

    fn output(
        &mut self,
        severity: Severity,
        detail: Detail,
        location: &Location<'_>,
        args: &[&dyn Printable],
    ) -> io::Result<()> {
        let line = format_line(severity, detail, TimeStamp::now(), location, &sprint(args));
        self.sink.write_all(line.as_bytes())
    }
}

/// `<prefix>\t<timestamp>[ <file>:<line>:] <message>\n`
pub(crate) fn format_line(
    severity: Severity,
    detail: Detail,
    timestamp: TimeStamp,
    location: &Location<'_>,
    message: &str,
) -> String {
    let mut line = String::with_capacity(message.len() + 64);
    // Writing into a String cannot fail.
    let _ = write!(line, "{}\t{}", severity.prefix(), timestamp);
    if detail == Detail::Full {
        let _ = write!(line, " {}:{}:", location.file(), location.line());
    }
    line.push(' ');
    line.push_str(message);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Print-style trace: `trace!(logger, "a", 1, 2)`.
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.trace(&[$(&$arg as &dyn $crate::logger::Printable),*])
    };
}

/// Formatted trace: `tracef!(logger, "count={}", 5)`.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$(&$arg as &dyn $crate::logger::Printable),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$(&$arg as &dyn $crate::logger::Printable),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal(&[$(&$arg as &dyn $crate::logger::Printable),*])
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}
