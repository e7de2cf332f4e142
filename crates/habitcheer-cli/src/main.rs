use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "habitcheer", version, about = "Habitcheer CLI")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Message for today's habit progress
    Progress(commands::progress::ProgressArgs),
    /// Message for a streak length
    Streak(commands::streak::StreakArgs),
    /// Random celebration message
    Celebrate(commands::celebrate::CelebrateArgs),
    /// List every message in the catalog
    Catalog(commands::catalog::CatalogArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Progress(args) => commands::progress::run(args),
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Celebrate(args) => commands::celebrate::run(args),
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
