use serde::{Deserialize, Serialize};

/// Seconds, as reported by the solver.
pub type Time = u64;

/// Availability window of a vehicle, serialized as `[start, end]`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "[Time; 2]", into = "[Time; 2]")]
pub struct TimeWindow {
    start: Time,
    end: Time,
}

impl TimeWindow {
    pub fn new(start: Time, end: Time) -> Self {
        debug_assert!(start <= end, "time window start after end");
        TimeWindow { start, end }
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    /// Restricts the window to end no later than `cutoff`.
    ///
    /// Returns `None` when the window opens after the cutoff, i.e. the vehicle
    /// cannot work at all before it.
    pub fn truncated(&self, cutoff: Time) -> Option<TimeWindow> {
        if self.end <= cutoff {
            Some(*self)
        } else if self.start > cutoff {
            None
        } else {
            Some(TimeWindow {
                start: self.start,
                end: cutoff,
            })
        }
    }
}

impl TryFrom<[Time; 2]> for TimeWindow {
    type Error = String;

    fn try_from([start, end]: [Time; 2]) -> Result<Self, Self::Error> {
        if start > end {
            return Err(format!("invalid time window [{start}, {end}]"));
        }

        Ok(TimeWindow { start, end })
    }
}

impl From<TimeWindow> for [Time; 2] {
    fn from(value: TimeWindow) -> Self {
        [value.start, value.end]
    }
}
