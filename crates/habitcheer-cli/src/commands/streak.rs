use clap::Args;
use habitcheer_core::{streak_message, StreakTier};
use serde::Serialize;

use super::CommandResult;

#[derive(Args)]
pub struct StreakArgs {
    /// Consecutive days completed
    pub streak: u32,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StreakReport {
    streak: u32,
    tier: StreakTier,
    message: String,
}

pub fn run(args: StreakArgs) -> CommandResult {
    let message = streak_message(args.streak);
    if args.json {
        let report = StreakReport {
            streak: args.streak,
            tier: StreakTier::for_streak(args.streak),
            message: message.into_owned(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{message}");
    }
    Ok(())
}
