//! Upstream name resolution
//!
//! Packages are not always listed upstream under their aports name, so
//! each lookup walks an ordered candidate list: the aports `pkgname`
//! first, then the APKBUILD aliases. The first name with a published
//! release wins.

use tracing::{debug, warn};

use crate::apkbuild::PackageRecord;
use crate::monitor::source::VersionSource;

/// A successful upstream lookup, remembering which name matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUpstream {
    pub latest_version: String,
    pub matched_name: String,
}

/// Candidate names for a package, primary name first, duplicates removed.
pub fn candidate_names(record: &PackageRecord) -> Vec<&str> {
    let mut names = vec![record.name.as_str()];
    for alt in &record.alt_names {
        if !names.contains(&alt.as_str()) {
            names.push(alt);
        }
    }
    names
}

/// Tries each candidate name in order until the source reports a release.
///
/// A failed lookup counts as a miss for that name; the remaining
/// candidates are still tried. Returns `None` when every candidate
/// misses.
pub async fn resolve(
    source: &dyn VersionSource,
    record: &PackageRecord,
) -> Option<ResolvedUpstream> {
    for name in candidate_names(record) {
        match source.latest_version(name).await {
            Ok(result) => {
                if let Some(latest_version) = result.latest_version {
                    return Some(ResolvedUpstream {
                        latest_version,
                        matched_name: name.to_string(),
                    });
                }
                debug!("No upstream release found under name: {}", name);
            }
            Err(err) => {
                warn!("Upstream lookup failed for {}: {}", name, err);
            }
        }
    }
    None
}
