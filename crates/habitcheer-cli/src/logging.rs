use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber so stdout stays clean for `--json` output.
pub fn init(verbose: bool) {
    let default = if verbose {
        "habitcheer=debug,habitcheer_core=debug"
    } else {
        "habitcheer=warn,habitcheer_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
