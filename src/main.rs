use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aports_watch::run::{RunOptions, run};

#[derive(Parser)]
#[command(name = "aports-watch")]
#[command(version, about = "Upstream release monitor for Alpine aports packages")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Do not clone or update the aports checkout before scanning
    #[arg(long)]
    skip_sync: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(RunOptions {
            config_path: cli.config,
            skip_sync: cli.skip_sync,
        }))
}

/// Logs go to stderr so the report stays alone on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
