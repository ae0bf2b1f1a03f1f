use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::cli::output::{self, OutputPreferences};
use crate::cli::render::{self, RenderOptions};
use crate::config::{Config, ConfigManager};
use crate::core::services::{ReportService, SummaryService};
use crate::errors::TrackerError;
use crate::ledger::TrackerSession;
use crate::storage::{load_plan_from_path, JsonStorage, StorageBackend, WeekPlan};

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

const USAGE: &str = "Usage: travel_core_cli [--config-dir <dir>] [--no-color] <command>\n\
Commands:\n  \
summary <plan.json>          print the weekly summary\n  \
export <plan.json> [dir]     write <name>_travel_report.json\n  \
rates                        print the rate table\n  \
help                         show this message";

/// A session rebuilt from a plan file, plus the days that were rejected.
pub struct LoadedWeek {
    pub session: TrackerSession,
    pub rejected: Vec<String>,
}

/// Replays a plan through a fresh session. A bad profile aborts; bad days are skipped.
pub fn replay_plan(plan: &WeekPlan) -> Result<LoadedWeek, CliError> {
    let mut session = TrackerSession::new();
    session.save_profile(&plan.profile)?;
    let mut rejected = Vec::new();
    for input in &plan.days {
        if let Err(err) = session.record_day(input) {
            rejected.push(format!("{}: {}", input.day.trim(), err));
        }
    }
    debug!(
        stored = session.ledger().len(),
        rejected = rejected.len(),
        "replayed week plan"
    );
    Ok(LoadedWeek { session, rejected })
}

pub fn run_cli<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config_dir: Option<PathBuf> = None;
    let mut no_color = false;
    let mut positional = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config-dir" => {
                let dir = args
                    .next()
                    .ok_or_else(|| CliError::Input("--config-dir needs a directory".into()))?;
                config_dir = Some(PathBuf::from(dir));
            }
            "--no-color" => no_color = true,
            _ => positional.push(arg),
        }
    }

    let manager = match config_dir {
        Some(dir) => ConfigManager::with_base_dir(dir),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && !no_color,
        quiet_mode: false,
    });
    let options = RenderOptions {
        currency_symbol: config.currency_symbol.clone(),
        show_live_estimate: config.show_live_estimate,
    };

    let mut positional = positional.into_iter();
    let command = positional.next().unwrap_or_else(|| "help".to_string());
    match command.as_str() {
        "summary" => {
            let plan = plan_argument(positional.next())?;
            summary(&plan, &options)
        }
        "export" => {
            let plan = plan_argument(positional.next())?;
            let dir = positional.next().map(PathBuf::from);
            export(&plan, dir, &config)
        }
        "rates" => {
            output::section("Rate Table");
            println!("{}", render::render_rate_table(&options));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => Err(CliError::Command(format!(
            "unknown command `{other}`\n{USAGE}"
        ))),
    }
}

fn plan_argument(arg: Option<String>) -> Result<WeekPlan, CliError> {
    let path = arg.ok_or_else(|| CliError::Input("a week plan file is required".into()))?;
    Ok(load_plan_from_path(Path::new(&path))?)
}

fn report_rejections(rejected: &[String]) {
    for message in rejected {
        output::warning(format!("skipped {message}"));
    }
}

fn summary(plan: &WeekPlan, options: &RenderOptions) -> Result<(), CliError> {
    let LoadedWeek { session, rejected } = replay_plan(plan)?;
    report_rejections(&rejected);
    let ledger = session.ledger();
    let profile = session
        .profile()
        .ok_or(CliError::Core(TrackerError::ProfileIncomplete))?;

    output::section("Profile");
    println!("{}", render::render_profile(profile));

    output::section("Weekly Travel Log");
    for card in render::render_day_cards(ledger, options) {
        println!("{card}");
    }

    let aggregate = SummaryService::aggregate(ledger);
    if aggregate.is_empty() {
        output::info("No travel recorded this week.");
    } else {
        output::section("Weekly Summary");
        for line in render::render_totals(&aggregate, options) {
            println!("{line}");
        }
        output::section("Daily Distance");
        for line in render::render_daily_chart(ledger) {
            println!("{line}");
        }
        output::section("Transport Mode Analysis");
        println!("{}", render::render_mode_table(&aggregate, options));
        for line in render::render_best_performers(&aggregate, options) {
            println!("{line}");
        }
        output::section("Distance by Transport Mode");
        for line in render::render_mode_shares(&aggregate) {
            println!("{line}");
        }
    }

    output::section("Environmental Impact");
    for line in render::render_impact(&aggregate) {
        println!("{line}");
    }
    Ok(())
}

fn export(plan: &WeekPlan, dir: Option<PathBuf>, config: &Config) -> Result<(), CliError> {
    let LoadedWeek { session, rejected } = replay_plan(plan)?;
    report_rejections(&rejected);
    let profile = session
        .profile()
        .ok_or(CliError::Core(TrackerError::ProfileIncomplete))?;
    let aggregate = SummaryService::aggregate(session.ledger());
    let snapshot = ReportService::build_snapshot(profile, session.ledger(), &aggregate);

    let storage = JsonStorage::new(dir.or_else(|| config.export_dir.clone()))?;
    let path = storage.export(&snapshot)?;
    output::success(format!("Report written to {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayInput, ProfileInput, Weekday};

    fn plan() -> WeekPlan {
        WeekPlan {
            profile: ProfileInput::new("Nisha", 35, "Hyundai i20", "Mysuru"),
            days: vec![
                DayInput::travel("Monday", "Office", "Car (Petrol)", 14.0, "Round-trip"),
                DayInput::travel("Tuesday", "", "Bus", 5.0, "One-way"),
                DayInput::travel("Wednesday", "Market", "Walking", 1.5, "One-way"),
                DayInput::no_travel("Wednesday"),
            ],
        }
    }

    #[test]
    fn replay_skips_rejected_days_and_applies_toggles() {
        let loaded = replay_plan(&plan()).unwrap();
        let ledger = loaded.session.ledger();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.traveled(Weekday::Monday));
        assert!(!ledger.traveled(Weekday::Wednesday));
        assert_eq!(loaded.rejected.len(), 1);
        assert!(loaded.rejected[0].starts_with("Tuesday: "));
        assert!(loaded.rejected[0].contains("destination"));
    }

    #[test]
    fn replay_fails_on_incomplete_profile() {
        let mut bad = plan();
        bad.profile.age = 12;
        assert!(matches!(
            replay_plan(&bad),
            Err(CliError::Core(TrackerError::Validation(_)))
        ));
    }
}
