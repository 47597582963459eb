use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// Wall-clock time of a log line, rendered as `YYYY/MM/DD HH:MM:SS.ffffff`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeStamp(pub(crate) DateTime<Local>);

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

impl TimeStamp {
    pub fn now() -> Self {
        TimeStamp(Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        TimeStamp(dt.with_timezone(&Local))
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}
