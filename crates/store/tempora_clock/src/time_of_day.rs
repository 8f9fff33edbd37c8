use std::sync::LazyLock;

use crate::ClockError;

/// Number of distinct minutes in a day; a [`TimeOfDay`] is always below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Hour `0-23` with an optional leading zero, a colon, then minute `00-59`.
///
/// `$` in `regex_lite` only matches at the very end of the input,
/// so trailing newlines are rejected too.
static TIME_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("constant pattern")
});

/// Converts a `HH:MM` string into minutes since midnight.
///
/// ```
/// assert_eq!(tempora_clock::parse_time_to_minutes("15:00"), Ok(900));
/// assert!(tempora_clock::parse_time_to_minutes("24:00").is_err());
/// ```
#[inline]
pub fn parse_time_to_minutes(input: &str) -> Result<u16, ClockError> {
    TimeOfDay::parse(input).map(TimeOfDay::minutes)
}

/// A time of day with minute resolution, stored as minutes since midnight.
///
/// Always in `[0, 1439]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(pub(crate) u16);

impl TimeOfDay {
    /// Validates and converts in a single pass.
    ///
    /// Accepts `H:MM` and `HH:MM`. Rejects out-of-range fields, single-digit minutes,
    /// surrounding whitespace and anything else that isn't exactly a time of day.
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        let captures = TIME_PATTERN
            .captures(input)
            .ok_or_else(|| ClockError::invalid_time(input))?;

        let field = |index: usize| {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u16>().ok())
                .ok_or_else(|| ClockError::invalid_time(input))
        };

        let hours = field(1)?;
        let minutes = field(2)?;
        Ok(Self(hours * 60 + minutes))
    }

    /// A uniformly distributed time of day.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..MINUTES_PER_DAY))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Signed offset in minutes, `self - reference`.
    ///
    /// There is no wraparound at midnight: `23:59` is `+1439` minutes from `00:00`, not `-1`.
    #[inline]
    pub fn offset_from(self, reference: Self) -> i32 {
        i32::from(self.0) - i32::from(reference.0)
    }

    /// Where the hands of an analog clock point at this time.
    pub fn hand_angles(self) -> HandAngles {
        let hour = f32::from(self.hour() % 12);
        let minute = f32::from(self.minute());
        HandAngles {
            hour: hour * 30.0 + minute * 0.5,
            minute: minute * 6.0,
        }
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = ClockError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ----------------------------------------------------------------------------

/// Rotation of analog clock hands, in degrees clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandAngles {
    /// 30° per hour, plus half a degree per minute.
    pub hour: f32,

    /// 6° per minute.
    pub minute: f32,
}

// ----------------------------------------------------------------------------
