//! End-to-end monitoring run
//!
//! Wires configuration, the aports checkout, the upstream client,
//! history and notification together. Everything after a successful
//! repository sync degrades softly: lookup, history and delivery
//! problems are logged without aborting the run.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use crate::apkbuild::MaintainerMatcher;
use crate::aports;
use crate::config::Config;
use crate::history::History;
use crate::monitor::release_monitoring::ReleaseMonitoringClient;
use crate::monitor::runner::{self, CheckOptions};
use crate::notify::Notifier;
use crate::notify::console::ConsoleNotifier;
use crate::notify::telegram::TelegramNotifier;

/// Options taken from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub skip_sync: bool,
}

pub async fn run(options: RunOptions) -> anyhow::Result<()> {
    let config = Config::load(&options.config_path)
        .with_context(|| format!("loading {}", options.config_path.display()))?;

    if options.skip_sync {
        info!("Skipping aports repository sync");
    } else {
        aports::sync_repository(&config.aports_repo_url, &config.aports_dir)
            .context("syncing aports repository")?;
    }

    let matcher = MaintainerMatcher::new(&config.maintainer);
    let packages = aports::find_maintainer_packages(&config.aports_dir, &matcher);
    if packages.is_empty() {
        info!("No packages maintained by {} found", config.maintainer);
        return Ok(());
    }
    info!(
        "Found {} packages maintained by {}",
        packages.len(),
        config.maintainer
    );

    let mut history = History::load(&config.history_file);
    let client = ReleaseMonitoringClient::new(
        config.release_monitoring_api_url.clone(),
        config.api_key.clone(),
        config.distribution.clone(),
    );

    let check_options = CheckOptions {
        interval_days: config.check_interval_days,
        concurrency: config.concurrency_limit,
    };
    let report = runner::run_checks(&client, &packages, &mut history, check_options).await;

    if let Err(err) = history.save() {
        warn!("Failed to save history: {}", err);
    }

    if report.is_empty() {
        info!("Nothing to report, every package was checked recently");
        return Ok(());
    }

    let mut notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(ConsoleNotifier)];
    if let Some((token, chat_id)) = config.telegram() {
        notifiers.push(Box::new(TelegramNotifier::new(
            token.to_string(),
            chat_id.to_string(),
        )));
    }
    for notifier in &notifiers {
        if let Err(err) = notifier.deliver(&report).await {
            warn!("Failed to deliver report: {}", err);
        }
    }

    Ok(())
}
