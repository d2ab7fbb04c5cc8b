//! Drives one monitoring run end to end

use chrono::Utc;
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::apkbuild::PackageRecord;
use crate::history::History;
use crate::monitor::classifier::{classify, should_check};
use crate::monitor::report::Report;
use crate::monitor::resolver::{ResolvedUpstream, resolve};
use crate::monitor::source::VersionSource;

/// Tuning for one run.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Minimum days between checks of the same package. Zero checks
    /// every package on every run.
    pub interval_days: u64,
    /// Upper bound on in-flight upstream lookups.
    pub concurrency: usize,
}

/// Checks every due package against the upstream source.
///
/// Packages checked within the interval are filtered out before any
/// lookup is dispatched. Lookups run concurrently up to the configured
/// limit; classification and history updates happen only after all of
/// them have finished, so history is never half-updated by a run that
/// dies mid-flight.
pub async fn run_checks(
    source: &dyn VersionSource,
    packages: &[PackageRecord],
    history: &mut History,
    options: CheckOptions,
) -> Report {
    let now = Utc::now();

    let due: Vec<&PackageRecord> = packages
        .iter()
        .filter(|record| {
            let due = should_check(history.get(&record.name), options.interval_days, now);
            if !due {
                debug!(
                    "Skipping {}: checked within the last {} days",
                    record.name, options.interval_days
                );
            }
            due
        })
        .collect();

    info!("Checking {} of {} packages", due.len(), packages.len());

    let lookups: Vec<(&PackageRecord, Option<ResolvedUpstream>)> = stream::iter(due)
        .map(|record| async move { (record, resolve(source, record).await) })
        .buffer_unordered(options.concurrency.max(1))
        .collect()
        .await;

    let mut classifications = Vec::with_capacity(lookups.len());
    for (record, resolved) in lookups {
        let classification = classify(record, resolved.as_ref());
        history.record_check(
            &record.name,
            &record.declared_version,
            resolved.as_ref().map(|r| r.latest_version.as_str()),
            now,
        );
        classifications.push((record.name.clone(), classification));
    }

    Report::from_classifications(classifications)
}
