use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Transaction timestamp assigned by the host.
///
/// A wall-clock millisecond component plus a logical counter, so two
/// transactions stamped within the same millisecond still order strictly.
///
/// Ordering: `physical_ms` → `logical` (total order).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxTimestamp {
    /// Wall-clock milliseconds since UNIX epoch.
    pub physical_ms: u64,
    /// Logical counter for transactions at the same physical time.
    pub logical: u32,
}

impl TxTimestamp {
    /// Create a timestamp from its two components.
    pub fn new(physical_ms: u64, logical: u32) -> Self {
        Self {
            physical_ms,
            logical,
        }
    }

    /// Whole seconds since UNIX epoch.
    pub fn seconds(&self) -> i64 {
        (self.physical_ms / 1000) as i64
    }

    /// Sub-second part in nanoseconds.
    pub fn nanos(&self) -> u32 {
        ((self.physical_ms % 1000) * 1_000_000) as u32
    }

    /// Wall-clock part as a UTC date-time, if representable.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds(), self.nanos())
    }

    /// RFC 3339 rendering with millisecond precision.
    pub fn to_rfc3339(&self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            None => self.to_string(),
        }
    }
}

impl fmt::Debug for TxTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxTimestamp({}ms.{})", self.physical_ms, self.logical)
    }
}

impl fmt::Display for TxTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seconds:{} nanos:{}", self.seconds(), self.nanos())
    }
}
