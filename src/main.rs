use anyhow::Context;
use clap::Parser;
use staymate::cli::{Cli, Commands};
use staymate::{commands, sources, Catalog, Config, SearchForm};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::default().with_dataset(cli.dataset);

    let source = sources::from_config(&config);
    info!("Loading listings from {} source", source.source_name());
    let properties = source.load().await?;
    let catalog = Catalog::from_properties(properties).context("Dataset failed validation")?;
    info!(
        "Catalog ready with {} properties ({} without a usable added date)",
        catalog.len(),
        catalog.undated_count()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::List {
        filters: Default::default(),
        json: false,
    }) {
        Commands::List { filters, json } => {
            commands::list(&catalog, &SearchForm::from(filters), json, &config, &mut out)?;
        }
        Commands::Show { id, json } => {
            commands::show(&catalog, &id, json, &config, &mut out)?;
        }
        Commands::Session => {
            let stdin = io::stdin();
            let session = commands::run_session(catalog, &config, stdin.lock(), &mut out)?;
            info!("Session ended with {} favorites", session.favorites().len());
        }
    }

    Ok(())
}
