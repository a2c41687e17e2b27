use campusride_cli::commands::{self, Cli};
use campusride_cli::state::AppContext;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campusride=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = campusride_store::Config::load()?;
    tracing::info!("CampusRide data file: {}", config.storage.path.display());

    let ctx = AppContext::from_config(&config)?;
    commands::run(&ctx, cli.command)
}
