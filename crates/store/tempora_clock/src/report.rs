use itertools::Itertools as _;

use crate::{
    ClockError, ClockStatus, SyncSummary, TimeOfDay, differences_from, format_difference,
};

const RULE: &str = "------------------------------------------";

/// The reference time used by the console report when nothing else is given.
pub const DEFAULT_REFERENCE: &str = "15:00";

/// The town clocks checked by the console report when nothing else is given.
pub const DEFAULT_CLOCKS: [&str; 4] = ["14:45", "15:05", "15:00", "14:40"];

/// One clock in a [`SyncReport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub time: TimeOfDay,
    pub difference: i32,
}

impl ReportEntry {
    #[inline]
    pub fn status(&self) -> ClockStatus {
        ClockStatus::classify(self.difference)
    }
}

/// A validated set of clocks compared against a reference, ready to be printed.
///
/// The [`std::fmt::Display`] impl renders the console report:
///
/// ```text
/// Grand Clock Tower Time: 15:00
/// ------------------------------------------
/// Clock 1: 14:45 | 15 minutes BEHIND
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncReport {
    pub reference: TimeOfDay,
    pub entries: Vec<ReportEntry>,
}

impl SyncReport {
    /// Fails on the first invalid time, like [`crate::compute_differences`].
    pub fn new<S: AsRef<str>>(reference: &str, clocks: &[S]) -> Result<Self, ClockError> {
        let reference = TimeOfDay::parse(reference)?;
        let times = clocks
            .iter()
            .map(|clock| TimeOfDay::parse(clock.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let entries = times
            .iter()
            .zip(differences_from(reference, times.iter().copied()))
            .map(|(&time, difference)| ReportEntry { time, difference })
            .collect();
        Ok(Self { reference, entries })
    }

    /// The report over [`DEFAULT_REFERENCE`] and [`DEFAULT_CLOCKS`].
    pub fn town_clocks() -> Result<Self, ClockError> {
        Self::new(DEFAULT_REFERENCE, &DEFAULT_CLOCKS)
    }

    pub fn differences(&self) -> Vec<i32> {
        self.entries.iter().map(|entry| entry.difference).collect()
    }

    pub fn summary(&self) -> SyncSummary {
        SyncSummary::from_differences(&self.differences())
    }

    /// Everything up to and including the differences array, without the analysis.
    pub fn write_table(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        writeln!(f, "Grand Clock Tower Time: {}", self.reference)?;
        writeln!(f, "{RULE}")?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(
                f,
                "Clock {}: {} | {} {}",
                index + 1,
                entry.time,
                format_difference(entry.difference),
                entry.status()
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Time Differences Array: [{}]",
            self.entries.iter().map(|entry| entry.difference).join(", ")
        )
    }

    pub fn write_analysis(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        let SyncSummary {
            ahead,
            behind,
            synchronized,
            total: _,
        } = self.summary();

        writeln!(f, "📊 ANALYSIS:")?;
        writeln!(f, "• Clocks ahead: {ahead}")?;
        writeln!(f, "• Clocks behind: {behind}")?;
        writeln!(f, "• Clocks synchronized: {synchronized}")
    }
}

impl std::fmt::Display for SyncReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "🕐 TEMPORA CLOCK SYNCHRONIZATION SYSTEM 🕐")?;
        writeln!(f, "==========================================")?;
        self.write_table(f)?;
        writeln!(f)?;
        self.write_analysis(f)
    }
}
