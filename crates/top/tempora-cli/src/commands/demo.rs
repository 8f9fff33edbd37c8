use std::fmt::Write as _;

use anyhow::Context as _;
use tempora_clock::scenarios::SCENARIOS;

#[derive(Debug, Clone, Default, clap::Parser)]
pub struct DemoCommand {}

impl DemoCommand {
    pub fn run(self) -> anyhow::Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let mut out = String::from("🎯 TEMPORA CLOCK SYNC - DEMO EXAMPLES\n");

        for (index, scenario) in SCENARIOS.iter().enumerate() {
            let report = scenario
                .report()
                .with_context(|| format!("scenario {:?}", scenario.title))?;

            let heading = format!("EXAMPLE {}: {}", index + 1, scenario.title);
            writeln!(out, "\n📋 {heading}")?;
            writeln!(out, "{}", "=".repeat(heading.chars().count() + 3))?;
            write!(out, "{report}")?;
        }

        writeln!(out, "\n🎉 Demo completed! All examples executed successfully.")?;
        Ok(out)
    }
}
