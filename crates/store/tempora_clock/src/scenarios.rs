//! Canned scenarios shown by the demo.

use crate::{ClockError, SyncReport};

/// A named reference time with the clocks compared against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub title: &'static str,
    pub reference: &'static str,
    pub clocks: &'static [&'static str],
}

impl Scenario {
    pub fn report(&self) -> Result<SyncReport, ClockError> {
        SyncReport::new(self.reference, self.clocks)
    }
}

pub const SCENARIOS: [Scenario; 5] = [
    Scenario {
        title: "Challenge Data",
        reference: crate::DEFAULT_REFERENCE,
        clocks: &crate::DEFAULT_CLOCKS,
    },
    Scenario {
        title: "Morning Office Scenario",
        reference: "09:00",
        clocks: &["08:58", "09:02", "09:00", "08:55", "09:05"],
    },
    Scenario {
        title: "Midnight Shift",
        reference: "00:00",
        clocks: &["23:58", "00:02", "00:00", "23:55"],
    },
    Scenario {
        title: "Broken Clocks (Large Differences)",
        reference: "12:00",
        clocks: &["10:00", "18:30", "12:00", "02:15"],
    },
    Scenario {
        title: "Perfect Synchronization",
        reference: "15:00",
        clocks: &["15:00", "15:00", "15:00", "15:00"],
    },
];
