mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use mdanalysis_data::dataset::descr::read_description;
use mdanalysis_data::{Config, DatasetFetcher, DatasetRegistry, Downloader};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_home = cli.data_home.as_deref();

    match cli.command {
        Commands::Fetch {
            name,
            offline,
            quiet,
        } => {
            let downloader = if quiet {
                Downloader::quiet()?
            } else {
                Downloader::new()?
            };
            let fetcher = DatasetFetcher::new(DatasetRegistry::builtin(), downloader);
            let dataset = fetcher
                .fetch(&name, data_home, !offline)
                .with_context(|| format!("failed to fetch dataset '{}'", name))?;

            tracing::info!(
                "Dataset '{}' ready ({} downloads)",
                name,
                fetcher.downloader().transfers()
            );
            println!("{}", serde_json::to_string_pretty(&dataset)?);
        }

        Commands::Describe { name } => {
            let meta = DatasetRegistry::builtin().get(&name)?;
            println!("{}", read_description(&meta.description)?);
        }

        Commands::List => {
            let registry = DatasetRegistry::builtin();
            println!("Available datasets:\n");
            for meta in registry.iter() {
                if meta.directory == meta.name {
                    println!("  {}", meta.name);
                } else {
                    println!("  {} (stored in {})", meta.name, meta.directory);
                }
            }
        }

        Commands::Home => {
            println!("{}", Config::with_data_home(data_home)?.data_home.display());
        }

        Commands::Clear => {
            let config = Config::with_data_home(data_home)?;
            config
                .clear()
                .with_context(|| format!("failed to remove {}", config.data_home.display()))?;
            println!("Removed {}", config.data_home.display());
        }
    }

    Ok(())
}
