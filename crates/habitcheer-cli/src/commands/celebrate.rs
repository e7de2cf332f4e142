use clap::Args;
use habitcheer_core::messages::celebration_message_with;
use habitcheer_core::{celebration_message, Config};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use super::CommandResult;

#[derive(Args)]
pub struct CelebrateArgs {
    /// Seed for a reproducible pick (overrides messages.celebration_seed)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: CelebrateArgs) -> CommandResult {
    let rng = match args.seed {
        Some(seed) => Some(Pcg64::seed_from_u64(seed)),
        None => Config::load_or_default().celebration_rng(),
    };

    let message = match rng {
        Some(mut rng) => celebration_message_with(&mut rng),
        None => celebration_message(),
    };
    println!("{message}");
    Ok(())
}
