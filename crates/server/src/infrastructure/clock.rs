//! Clock port for injecting time.
//!
//! Skeleton instances and audit events are timestamped through this port so
//! tests can pin the clock.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
