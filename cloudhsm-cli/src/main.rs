//! CloudHSM command-line client
//!
//! Manages HSM partitions, client certificates, peers and software licenses
//! on Sakura Cloud.

mod commands;
mod config;
mod shutdown;

use clap::Parser;
use cloudhsm_sdk::client::HsmClient;
use commands::Command;
use config::{ConfigLoader, Overrides};
use shutdown::shutdown_signal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sakura Cloud CloudHSM client
#[derive(Parser, Debug)]
#[command(name = "cloudhsm")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (default: ./cloudhsm.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Zone to operate in (is1b, tk1a)
    #[arg(long, global = true, env = "SAKURACLOUD_ZONE")]
    zone: Option<String>,

    /// Override the API root URL, e.g. for a local endpoint
    #[arg(long, global = true, env = "SAKURACLOUD_LOCAL_ENDPOINT_CLOUDHSM")]
    api_root: Option<String>,

    #[arg(long, global = true, env = "SAKURACLOUD_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[arg(
        long,
        global = true,
        env = "SAKURACLOUD_ACCESS_TOKEN_SECRET",
        hide_env_values = true
    )]
    access_token_secret: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    tracing::debug!("Starting cloudhsm v{}", env!("CARGO_PKG_VERSION"));

    let overrides = Overrides {
        zone: args.zone,
        api_root: args.api_root,
        access_token: args.access_token,
        access_token_secret: args.access_token_secret,
    };
    let client_config = ConfigLoader::new(args.config, overrides)
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::debug!("Using API root {}", client_config.api_root());

    let client = HsmClient::new(client_config)?;

    tokio::select! {
        result = commands::run(args.command, client) => result,
        name = shutdown_signal() => anyhow::bail!("interrupted by {name}"),
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout stays clean JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,cloudhsm_sdk=info,cloudhsm=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_peer_requires_partition() {
        // SAKURACLOUD_CLOUDHSM_ID would satisfy the requirement.
        if std::env::var_os("SAKURACLOUD_CLOUDHSM_ID").is_some() {
            return;
        }
        let err = Args::try_parse_from(["cloudhsm", "peer", "list"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "cloudhsm",
            "hsm",
            "read",
            "110000000001",
            "--zone",
            "tk1a",
        ])
        .unwrap();
        assert_eq!(args.zone.as_deref(), Some("tk1a"));
        assert!(matches!(
            args.command,
            Command::Hsm(commands::HsmCommand::Read { ref id }) if id == "110000000001"
        ));
    }
}
