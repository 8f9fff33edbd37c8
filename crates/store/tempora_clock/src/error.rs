/// Failure to interpret or update clock data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The input is not a time of day of the form `HH:MM` (or `H:MM`).
    #[error("Invalid time format: {input}")]
    InvalidTimeFormat { input: String },

    #[error("Maximum number of unique clocks reached")]
    NoClockNamesLeft,
}

impl ClockError {
    #[inline]
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
        }
    }
}
