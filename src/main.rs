//! Storychar — hybrid story character importer

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use storychar_core::StorycharConfig;
use storychar_resolver::{FetchMode, Resolver};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "storychar",
    about = "Fetch a hybrid story character from the open data API, with offline samples"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one character and print it
    Import {
        /// Use local sample data instead of the API
        #[arg(long, default_value_t = false)]
        offline: bool,
        /// Endpoint to fetch from
        #[arg(short, long)]
        endpoint: Option<String>,
        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
        /// Config file (default: ~/.storychar/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storychar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("storychar {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Import {
            offline,
            endpoint,
            timeout,
            config,
        }) => import(offline, endpoint, timeout, config).await,
        None => import(false, None, None, None).await,
    }
}

/// One trigger, one character: flags override config, config overrides
/// the built-in defaults.
async fn import(
    offline: bool,
    endpoint: Option<String>,
    timeout: Option<u64>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => StorycharConfig::try_load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StorycharConfig::discover(),
    };

    let endpoint = endpoint.unwrap_or_else(|| config.endpoint().to_string());
    let timeout = timeout.map(Duration::from_secs).unwrap_or_else(|| config.timeout());
    let mode = if offline || config.offline_forced() {
        FetchMode::OfflineForced
    } else {
        FetchMode::RemotePreferred
    };

    if mode == FetchMode::RemotePreferred {
        info!("fetching character from {}", endpoint);
    }

    let resolver = Resolver::remote(endpoint, timeout, mode);
    let record = resolver.resolve().await;

    println!("Character Imported: {}", record.name);
    println!("Description: {}", record.description);

    Ok(())
}
