use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::timestamp::TxTimestamp;

struct ClockState {
    physical_ms: u64,
    logical: u32,
}

/// Monotonic transaction clock.
///
/// Combines wall-clock time with a logical counter:
/// `physical = max(wall_clock, last.physical)`; if physical advanced the
/// counter resets to 0, otherwise it increments. Every returned
/// [`TxTimestamp`] is strictly greater than the previous one.
pub struct TxClock {
    state: Mutex<ClockState>,
}

impl TxClock {
    /// Create a clock that has handed out no timestamps.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ClockState {
                physical_ms: 0,
                logical: 0,
            }),
        }
    }

    /// Stamp a new transaction.
    pub fn now(&self) -> TxTimestamp {
        let wall = Self::wall_clock_ms();
        let mut state = self.state.lock().expect("clock mutex poisoned");

        let physical = wall.max(state.physical_ms);
        let logical = if physical > state.physical_ms {
            0
        } else {
            state.logical + 1
        };

        state.physical_ms = physical;
        state.logical = logical;

        TxTimestamp::new(physical, logical)
    }

    fn wall_clock_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for TxClock {
    fn default() -> Self {
        Self::new()
    }
}
