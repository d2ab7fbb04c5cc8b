//! Local aports checkout handling
//!
//! Keeps a shallow clone of the aports repository up to date and scans
//! it for APKBUILDs carrying a given maintainer.

use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::apkbuild::{ApkbuildParser, MaintainerMatcher, PackageRecord};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    GitFailed { command: String, status: ExitStatus },
}

/// Clones the aports repository, or updates an existing checkout.
///
/// Git output passes through to the terminal. A shallow clone is
/// enough since only the current APKBUILDs are read.
pub fn sync_repository(repo_url: &str, dir: &Path) -> Result<(), SyncError> {
    if dir.join(".git").is_dir() {
        info!("Updating aports checkout in {}", dir.display());
        run_git(&["-C", &dir.display().to_string(), "pull", "--rebase"])
    } else {
        info!("Cloning {} into {}", repo_url, dir.display());
        run_git(&[
            "clone",
            "--depth=1",
            repo_url,
            &dir.display().to_string(),
        ])
    }
}

fn run_git(args: &[&str]) -> Result<(), SyncError> {
    let command = format!("git {}", args.join(" "));
    let status = Command::new("git")
        .args(args)
        .status()
        .map_err(|source| SyncError::Spawn {
            command: command.clone(),
            source,
        })?;
    if !status.success() {
        return Err(SyncError::GitFailed { command, status });
    }
    Ok(())
}

/// Walks the checkout and parses every APKBUILD whose maintainer line
/// matches.
///
/// APKBUILDs that fail to parse are logged and skipped so one broken
/// file cannot sink the whole run. The result is sorted by package
/// name to keep scan order deterministic.
pub fn find_maintainer_packages(dir: &Path, matcher: &MaintainerMatcher) -> Vec<PackageRecord> {
    let parser = ApkbuildParser::new();
    let mut records = Vec::new();

    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable directory entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() || entry.file_name() != "APKBUILD" {
            continue;
        }

        // Some APKBUILDs carry latin-1 maintainer names.
        let content = match std::fs::read(entry.path()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                warn!("Skipping {}: {}", entry.path().display(), err);
                continue;
            }
        };

        if !parser
            .maintainers(&content)
            .iter()
            .any(|maintainer| matcher.matches(maintainer))
        {
            continue;
        }

        match parser.parse(&content) {
            Ok(record) => {
                debug!("Found {} at {}", record.name, entry.path().display());
                records.push(record);
            }
            Err(err) => {
                warn!("Skipping {}: {}", entry.path().display(), err);
            }
        }
    }

    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}
