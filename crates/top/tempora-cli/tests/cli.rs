//! Argument parsing and rendered output of the `tempora` subcommands.

use clap::Parser as _;
use tempora_cli::{Args, Command};

fn parse(args: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("tempora").chain(args.iter().copied()))
}

fn sync(args: &[&str]) -> anyhow::Result<String> {
    let mut full = vec!["sync"];
    full.extend_from_slice(args);
    match parse(&full)?.command {
        Some(Command::Sync(cmd)) => cmd.render(),
        other => panic!("expected sync, got {other:?}"),
    }
}

#[test]
fn no_subcommand_means_report() {
    assert!(parse(&[]).unwrap().command.is_none());
}

#[test]
fn report_prints_the_town_clocks() {
    let Some(Command::Report(cmd)) = parse(&["report"]).unwrap().command else {
        panic!("expected report");
    };
    let out = cmd.render().unwrap();
    assert!(out.starts_with("🕐 TEMPORA CLOCK SYNCHRONIZATION SYSTEM 🕐\n"));
    assert!(out.contains("Clock 1: 14:45 | 15 minutes BEHIND\n"));
    assert!(out.contains("Time Differences Array: [-15, 5, 0, -20]\n"));
}

#[test]
fn demo_runs_every_scenario() {
    let Some(Command::Demo(cmd)) = parse(&["demo"]).unwrap().command else {
        panic!("expected demo");
    };
    let out = cmd.render().unwrap();
    for heading in [
        "📋 EXAMPLE 1: Challenge Data\n",
        "📋 EXAMPLE 3: Midnight Shift\n",
        "📋 EXAMPLE 5: Perfect Synchronization\n",
    ] {
        assert!(out.contains(heading), "{heading}");
    }
    assert!(out.contains("Time Differences Array: [1438, 2, 0, 1435]"));
    assert!(out.ends_with("🎉 Demo completed! All examples executed successfully.\n"));
}

#[test]
fn sync_renders_a_report() {
    let out = sync(&["--reference", "12:00", "11:30", "12:15", "12:00", "13:00"]).unwrap();
    similar_asserts::assert_eq!(
        out,
        "\
🕐 TEMPORA CLOCK SYNCHRONIZATION SYSTEM 🕐
==========================================
Grand Clock Tower Time: 12:00
------------------------------------------
Clock 1: 11:30 | 30 minutes BEHIND
Clock 2: 12:15 | 15 minutes AHEAD
Clock 3: 12:00 | 0 minutes SYNCHRONIZED
Clock 4: 13:00 | 60 minutes AHEAD
------------------------------------------
Time Differences Array: [-30, 15, 0, 60]

📊 ANALYSIS:
• Clocks ahead: 2
• Clocks behind: 1
• Clocks synchronized: 1
"
    );
}

#[test]
fn sync_json_matches_the_api_shape() {
    let out = sync(&["--json", "14:45", "15:05"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    similar_asserts::assert_eq!(
        value,
        serde_json::json!({
            "reference": "15:00",
            "differences": [-15, 5],
            "statuses": ["BEHIND", "AHEAD"],
            "summary": {"ahead": 1, "behind": 1, "synchronized": 0, "total": 2}
        })
    );
}

#[test]
fn sync_reports_bad_times_with_context() {
    let err = sync(&["-r", "15:00", "14:45", "3pm"]).unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "comparing 2 clock(s) against 15:00: Invalid time format: 3pm"
    );
}

#[test]
fn sync_without_clocks_is_empty() {
    let out = sync(&["--reference", "15:00"]).unwrap();
    assert!(out.contains("Grand Clock Tower Time: 15:00\n"));
    assert!(out.contains("Time Differences Array: []\n"));
    assert!(out.contains("• Clocks synchronized: 0\n"));

    let json: serde_json::Value = serde_json::from_str(&sync(&["--json"]).unwrap()).unwrap();
    assert_eq!(json["differences"], serde_json::json!([]));
    assert_eq!(json["summary"]["total"], 0);
}

#[test]
fn serve_flags() {
    let Some(Command::Serve(cmd)) =
        parse(&["serve", "--bind", "127.0.0.1", "--port", "8080"]).unwrap().command
    else {
        panic!("expected serve");
    };
    let debug = format!("{cmd:?}");
    assert!(debug.contains("127.0.0.1"), "{debug}");
    assert!(debug.contains("WebServerPort(8080)"), "{debug}");

    assert!(parse(&["serve", "--port", "not-a-port"]).is_err());
}
