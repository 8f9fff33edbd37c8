//! The `tempora` command line tool.
//!
//! ```text
//! tempora report
//! tempora demo
//! tempora sync --reference 15:00 14:45 15:05
//! tempora serve --port 4000
//! ```
//!
//! Running `tempora` without a subcommand prints the report.

mod commands;

pub use self::commands::{Args, Command, DemoCommand, ReportCommand, ServeCommand, SyncCommand};
