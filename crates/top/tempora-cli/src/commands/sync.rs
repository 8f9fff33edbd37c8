use anyhow::Context as _;
use tempora_clock::{ClockStatus, SyncReport};

#[derive(Debug, Clone, clap::Parser)]
pub struct SyncCommand {
    /// The Grand Clock Tower time every clock is compared against, as `HH:MM`.
    #[clap(long, short, default_value = tempora_clock::DEFAULT_REFERENCE)]
    reference: String,

    /// Clock times as `HH:MM`. With none, the report is empty.
    clocks: Vec<String>,

    /// Print JSON, shaped like the `/api/sync` response, instead of a report.
    #[clap(long)]
    json: bool,
}

impl SyncCommand {
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", self.render()?.trim_end());
        Ok(())
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let Self {
            reference,
            clocks,
            json,
        } = self;

        let report = SyncReport::new(reference, clocks.as_slice())
            .with_context(|| format!("comparing {} clock(s) against {reference}", clocks.len()))?;

        if *json {
            let differences = report.differences();
            let statuses: Vec<ClockStatus> = differences
                .iter()
                .copied()
                .map(ClockStatus::classify)
                .collect();

            let value = serde_json::json!({
                "reference": report.reference,
                "differences": differences,
                "statuses": statuses,
                "summary": report.summary(),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(report.to_string())
        }
    }
}
