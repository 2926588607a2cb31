use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nearby_providers::config::FileConfig;
use nearby_providers::server::{self, AppState};

/// Serve support providers near a UK postcode, annotated with distance in miles
///
/// Examples:
///   # Listen on all interfaces, port 80 (default)
///   nearby-providers
///
///   # Local development with debug logging
///   nearby-providers -p 8080 -v
///
///   # Use a self-hosted postcodes.io with a longer timeout
///   nearby-providers --geocoder-url http://localhost:8000/postcodes/ --timeout-secs 10
///
///   # Use a config file
///   nearby-providers --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "nearby-providers")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches nearby-providers.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Base URL of the postcode lookup service
    #[arg(long)]
    geocoder_url: Option<String>,

    /// Timeout for each postcode lookup, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    /// Command line values win over the config file.
    fn apply(&self, mut config: FileConfig) -> FileConfig {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref url) = self.geocoder_url {
            config.geocoder.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.geocoder.timeout_secs = secs;
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "nearby_providers=debug,tower_http=debug"
    } else {
        "nearby_providers=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_config = match args.config {
        Some(ref path) => FileConfig::from_path(path)?,
        None => FileConfig::load().unwrap_or_default(),
    };
    let config = args.apply(file_config);

    tracing::info!(
        geocoder = %config.geocoder.base_url,
        timeout_secs = config.geocoder.timeout_secs,
        "service running"
    );

    let state = AppState::from_config(&config.geocoder).context("Failed to set up geocoder")?;
    server::serve(&config.server, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file() {
        let args = Args::parse_from(["nearby-providers", "-p", "8080", "--timeout-secs", "9"]);
        let mut file = FileConfig::default();
        file.server.host = "127.0.0.1".to_string();

        let config = args.apply(file);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.geocoder.timeout_secs, 9);
        assert_eq!(
            config.geocoder.base_url,
            "https://api.postcodes.io/postcodes/"
        );
    }
}
