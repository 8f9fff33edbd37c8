//! Clock synchronization arithmetic.
//!
//! Times of day are parsed from `HH:MM` strings into minutes since midnight, and every
//! clock is compared against a single reference clock:
//!
//! ```
//! use tempora_clock::{ClockStatus, compute_differences};
//!
//! let differences = compute_differences("15:00", &["14:45", "15:05", "15:00"]).unwrap();
//! assert_eq!(differences, vec![-15, 5, 0]);
//!
//! let statuses: Vec<_> = differences.into_iter().map(ClockStatus::classify).collect();
//! assert_eq!(statuses, [ClockStatus::Behind, ClockStatus::Ahead, ClockStatus::Synchronized]);
//! ```
//!
//! This is the only place the arithmetic lives: the console report, the demo and the
//! web dashboard all go through it.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

mod board;
mod error;
mod report;
mod sync;
mod time_of_day;

pub mod scenarios;

pub use self::{
    board::{BoardRow, BoardView, CLOCK_NAMES, ClockBoard, NamedClock},
    error::ClockError,
    report::{DEFAULT_CLOCKS, DEFAULT_REFERENCE, ReportEntry, SyncReport},
    sync::{
        ClockStatus, SyncSummary, compute_differences, differences_from, format_difference,
        format_signed,
    },
    time_of_day::{HandAngles, MINUTES_PER_DAY, TimeOfDay, parse_time_to_minutes},
};
