//! Host time source for `date`.
//!
//! The dispatcher never reads the system clock itself; it asks the `Clock`
//! it was given, so tests and replaying hosts can pin the timestamp.

use chrono::Local;

/// Supplies the current timestamp string.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Local wall-clock time, `%Y-%m-%d %H:%M:%S`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Always answers the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
