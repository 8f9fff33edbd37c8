mod demo;
mod report;
mod serve;
mod sync;

use clap::Subcommand;

pub use self::demo::DemoCommand;
pub use self::report::ReportCommand;
pub use self::serve::ServeCommand;
pub use self::sync::SyncCommand;

// ---

/// Compare town clocks against the Grand Clock Tower.
#[derive(Debug, Clone, clap::Parser)]
#[clap(name = "tempora", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        self.command
            .unwrap_or(Command::Report(ReportCommand::default()))
            .run()
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the synchronization report for the town's clocks.
    ///
    /// This is the default when no subcommand is given.
    Report(ReportCommand),

    /// Run every canned scenario through the report.
    Demo(DemoCommand),

    /// Compare arbitrary `HH:MM` clocks against a reference time.
    ///
    /// Example: `tempora sync --reference 09:00 08:58 09:02 09:00`
    Sync(SyncCommand),

    /// Host the clock dashboard over HTTP.
    ///
    /// Example: `tempora serve --bind 127.0.0.1 --port 8080`
    Serve(ServeCommand),
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Report(cmd) => cmd.run(),
            Self::Demo(cmd) => cmd.run(),
            Self::Sync(cmd) => cmd.run(),
            Self::Serve(cmd) => cmd.run(),
        }
    }
}
