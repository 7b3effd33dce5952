//! Time stamps carried by message headers.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// A point in time, `builtin_interfaces/msg/Time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Time {
    /// Seconds since UNIX epoch.
    pub sec: i32,

    /// Nanoseconds component.
    pub nanosec: u32,
}

impl Time {
    /// Creates a new Time instance.
    pub const fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }

    /// The UNIX epoch. A zero stamp means "unset" in goal ids and headers.
    pub const fn zero() -> Self {
        Self { sec: 0, nanosec: 0 }
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    /// Returns true for the zero stamp.
    pub fn is_zero(&self) -> bool {
        self.sec == 0 && self.nanosec == 0
    }
}

impl From<&SystemTime> for Time {
    fn from(t: &SystemTime) -> Self {
        // clocks set before the epoch map to the zero stamp
        let dur = t.duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
        let sec = i32::try_from(dur.as_secs()).unwrap_or(i32::MAX);
        Time {
            sec,
            nanosec: dur.subsec_nanos(),
        }
    }
}

impl From<SystemTime> for Time {
    fn from(t: SystemTime) -> Self {
        (&t).into()
    }
}

impl From<&Time> for SystemTime {
    fn from(t: &Time) -> Self {
        let secs = Duration::from_secs(t.sec.max(0) as u64);
        let nanos = Duration::from_nanos(t.nanosec as u64);
        SystemTime::UNIX_EPOCH + secs + nanos
    }
}

impl From<Time> for SystemTime {
    fn from(t: Time) -> Self {
        (&t).into()
    }
}
