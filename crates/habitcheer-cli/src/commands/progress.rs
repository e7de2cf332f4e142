use chrono::NaiveDate;
use clap::Args;
use habitcheer_core::{Clock, Config, FixedClock, SystemClock};

use super::CommandResult;

#[derive(Args)]
pub struct ProgressArgs {
    /// Habits completed today
    pub completed: u32,
    /// Habits scheduled today
    pub total: u32,
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ProgressArgs) -> CommandResult {
    let config = Config::load_or_default();
    match args.date {
        Some(date) => print_report(&config, FixedClock::new(date), &args),
        None => print_report(&config, SystemClock, &args),
    }
}

fn print_report<C: Clock>(config: &Config, clock: C, args: &ProgressArgs) -> CommandResult {
    let selector = config.selector(clock)?;
    let report = selector.describe_progress(args.completed, args.total);
    tracing::debug!(category = ?report.category, date = %report.date, "progress message selected");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message);
    }
    Ok(())
}
