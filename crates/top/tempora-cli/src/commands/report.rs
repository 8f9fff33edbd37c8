use anyhow::Context as _;
use tempora_clock::SyncReport;

#[derive(Debug, Clone, Default, clap::Parser)]
pub struct ReportCommand {}

impl ReportCommand {
    pub fn run(self) -> anyhow::Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let report = SyncReport::town_clocks().context("built-in town clocks")?;
        Ok(report.to_string())
    }
}
