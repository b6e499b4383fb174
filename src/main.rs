use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use courtscout::app::AppContext;
use courtscout::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.clone())?;

    match cli.command {
        Commands::Crawl { output, cities } => {
            commands::crawl(&ctx, &output, &cities).await?;
        }
        Commands::Cities => {
            commands::list_cities();
        }
    }

    Ok(())
}
