use crate::{ClockError, TimeOfDay};

/// Computes `clock - reference` in minutes for every clock, in input order.
///
/// The reference is validated first, then every clock in order. The first invalid
/// time aborts the whole computation: there are no partial results.
///
/// Differences are not wrapped around midnight, so they range over `±1439`.
///
/// ```
/// let clocks = ["14:45", "15:05", "15:00", "14:40"];
/// let differences = tempora_clock::compute_differences("15:00", &clocks);
/// assert_eq!(differences, Ok(vec![-15, 5, 0, -20]));
/// ```
pub fn compute_differences<S: AsRef<str>>(
    reference: &str,
    clocks: &[S],
) -> Result<Vec<i32>, ClockError> {
    let reference = TimeOfDay::parse(reference)?;
    clocks
        .iter()
        .map(|clock| TimeOfDay::parse(clock.as_ref()).map(|time| time.offset_from(reference)))
        .collect()
}

/// Same as [`compute_differences`], for already validated times.
pub fn differences_from(
    reference: TimeOfDay,
    clocks: impl IntoIterator<Item = TimeOfDay>,
) -> Vec<i32> {
    clocks
        .into_iter()
        .map(|time| time.offset_from(reference))
        .collect()
}

// ----------------------------------------------------------------------------

/// How a clock relates to the reference clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ClockStatus {
    /// Positive difference.
    Ahead,

    /// Negative difference.
    Behind,

    /// Zero difference.
    Synchronized,
}

impl ClockStatus {
    #[inline]
    pub fn classify(difference: i32) -> Self {
        match difference.signum() {
            1 => Self::Ahead,
            -1 => Self::Behind,
            _ => Self::Synchronized,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ahead => "AHEAD",
            Self::Behind => "BEHIND",
            Self::Synchronized => "SYNCHRONIZED",
        }
    }
}

impl std::fmt::Display for ClockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"0 minutes"`, `"1 minute"`, `"15 minutes"`. The sign is dropped.
pub fn format_difference(difference: i32) -> String {
    match difference.unsigned_abs() {
        1 => "1 minute".to_owned(),
        n => format!("{n} minutes"),
    }
}

/// `"+5 min"`, `"-15 min"`, `"+0 min"`.
pub fn format_signed(difference: i32) -> String {
    format!("{difference:+} min")
}

// ----------------------------------------------------------------------------

/// How many clocks fall in each [`ClockStatus`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyncSummary {
    pub ahead: usize,
    pub behind: usize,
    pub synchronized: usize,
    pub total: usize,
}

impl SyncSummary {
    pub fn from_differences(differences: &[i32]) -> Self {
        differences
            .iter()
            .fold(Self::default(), |mut summary, &difference| {
                match ClockStatus::classify(difference) {
                    ClockStatus::Ahead => summary.ahead += 1,
                    ClockStatus::Behind => summary.behind += 1,
                    ClockStatus::Synchronized => summary.synchronized += 1,
                }
                summary.total += 1;
                summary
            })
    }

    #[inline]
    pub fn all_synchronized(&self) -> bool {
        self.synchronized == self.total
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_differences() {
        assert_eq!(
            compute_differences("15:00", &["14:45", "15:05", "15:00", "14:40"]),
            Ok(vec![-15, 5, 0, -20])
        );
        assert_eq!(
            compute_differences("12:00", &["11:30", "12:15", "12:00", "13:00"]),
            Ok(vec![-30, 15, 0, 60])
        );
        assert_eq!(compute_differences("15:00", &["15:00"]), Ok(vec![0]));
        assert_eq!(compute_differences("15:00", &["15:05"]), Ok(vec![5]));
        assert_eq!(compute_differences("15:00", &["14:45"]), Ok(vec![-15]));
    }

    #[test]
    fn test_midnight_is_not_wrapped() {
        assert_eq!(
            compute_differences("00:00", &["23:59", "00:01"]),
            Ok(vec![1439, 1])
        );
    }

    #[test]
    fn test_empty_clock_list() {
        let no_clocks: [&str; 0] = [];
        assert_eq!(compute_differences("07:30", &no_clocks), Ok(vec![]));
    }

    #[test]
    fn test_invalid_reference_is_reported_even_without_clocks() {
        let no_clocks: [&str; 0] = [];
        assert_eq!(
            compute_differences("24:00", &no_clocks),
            Err(ClockError::invalid_time("24:00"))
        );
    }

    #[test]
    fn test_first_invalid_clock_aborts() {
        assert_eq!(
            compute_differences("15:00", &["14:45", "12:60", "abc"]),
            Err(ClockError::invalid_time("12:60"))
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let clocks = vec!["09:02".to_owned(), "8:58".to_owned()];
        assert_eq!(compute_differences("09:00", &clocks), Ok(vec![2, -2]));
    }

    #[test]
    fn test_classify() {
        assert_eq!(ClockStatus::classify(5), ClockStatus::Ahead);
        assert_eq!(ClockStatus::classify(1439), ClockStatus::Ahead);
        assert_eq!(ClockStatus::classify(-1), ClockStatus::Behind);
        assert_eq!(ClockStatus::classify(0), ClockStatus::Synchronized);
        assert_eq!(ClockStatus::Synchronized.to_string(), "SYNCHRONIZED");
    }

    #[test]
    fn test_format_difference() {
        assert_eq!(format_difference(0), "0 minutes");
        assert_eq!(format_difference(1), "1 minute");
        assert_eq!(format_difference(-1), "1 minute");
        assert_eq!(format_difference(-15), "15 minutes");
        assert_eq!(format_signed(5), "+5 min");
        assert_eq!(format_signed(-15), "-15 min");
        assert_eq!(format_signed(0), "+0 min");
    }

    #[test]
    fn test_summary() {
        let summary = SyncSummary::from_differences(&[-15, 5, 0, -20]);
        assert_eq!(
            summary,
            SyncSummary {
                ahead: 1,
                behind: 2,
                synchronized: 1,
                total: 4,
            }
        );
        assert!(!summary.all_synchronized());
        assert!(SyncSummary::from_differences(&[0, 0]).all_synchronized());
        assert!(SyncSummary::from_differences(&[]).all_synchronized());
    }
}
