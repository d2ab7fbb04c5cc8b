//! APKBUILD metadata extraction.
//!
//! Reads the small shell-variable subset an upstream check needs
//! (`pkgname`, `pkgver` and the `_pkgreal`/`_pkgname` aliases) without
//! evaluating the script. Values are taken literally, so variable
//! references like `$_realver` are not expanded.

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("APKBUILD does not define pkgname")]
    MissingName,
    #[error("APKBUILD does not define pkgver")]
    MissingVersion,
}

/// Package metadata extracted from a single APKBUILD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Value of `pkgname`.
    pub name: String,
    /// Value of `pkgver`, exactly as written.
    pub declared_version: String,
    /// Alternate upstream names (`_pkgreal`, then `_pkgname`), in the
    /// order they should be tried when the primary name is unknown.
    pub alt_names: Vec<String>,
}

pub struct ApkbuildParser {
    assign_regex: Regex,
    maintainer_regex: Regex,
}

impl ApkbuildParser {
    pub fn new() -> Self {
        Self {
            assign_regex: Regex::new(r"^(pkgname|pkgver|_pkgreal|_pkgname)=(.*)$").unwrap(),
            maintainer_regex: Regex::new(r"(?i)^#\s*Maintainer:\s*(.*)$").unwrap(),
        }
    }

    /// Extracts package metadata from APKBUILD text.
    ///
    /// Only whole-line assignments are recognized. When a variable is
    /// assigned more than once the last assignment wins, matching how
    /// the shell would leave it.
    pub fn parse(&self, content: &str) -> Result<PackageRecord, ParseError> {
        let mut name = None;
        let mut version = None;
        let mut pkgreal = None;
        let mut pkgname_alias = None;

        for line in content.lines() {
            let Some(caps) = self.assign_regex.captures(line.trim()) else {
                continue;
            };
            let value = unquote(&caps[2]);
            if value.is_empty() {
                continue;
            }
            match &caps[1] {
                "pkgname" => name = Some(value),
                "pkgver" => version = Some(value),
                "_pkgreal" => pkgreal = Some(value),
                "_pkgname" => pkgname_alias = Some(value),
                _ => unreachable!(),
            }
        }

        let name = name.ok_or(ParseError::MissingName)?;
        let declared_version = version.ok_or(ParseError::MissingVersion)?;
        let alt_names = [pkgreal, pkgname_alias].into_iter().flatten().collect();

        Ok(PackageRecord {
            name,
            declared_version,
            alt_names,
        })
    }

    /// Returns the values of all `# Maintainer:` comment lines.
    ///
    /// The marker is matched case-insensitively because aports contains
    /// both `# Maintainer:` and `# maintainer:` spellings.
    pub fn maintainers(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .filter_map(|line| self.maintainer_regex.captures(line.trim()))
            .map(|caps| caps[1].trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }
}

impl Default for ApkbuildParser {
    fn default() -> Self {
        Self::new()
    }
}

fn unquote(raw: &str) -> String {
    raw.trim().trim_matches('"').trim_matches('\'').to_string()
}

/// Matches APKBUILD maintainer lines against a configured identity.
///
/// Built once from the configured `Name <email>` string. A maintainer
/// line matches when it contains the full identity, the name alone or
/// the email alone, all compared case-insensitively.
pub struct MaintainerMatcher {
    needles: Vec<String>,
}

impl MaintainerMatcher {
    pub fn new(maintainer: &str) -> Self {
        let mut needles = vec![maintainer.trim().to_lowercase()];
        if let Some((name, email)) = split_name_email(maintainer) {
            needles.push(name.to_lowercase());
            needles.push(email.to_lowercase());
        }
        needles.retain(|needle| !needle.is_empty());
        needles.dedup();
        Self { needles }
    }

    pub fn matches(&self, maintainer_line: &str) -> bool {
        let haystack = maintainer_line.to_lowercase();
        self.needles.iter().any(|needle| haystack.contains(needle))
    }
}

fn split_name_email(s: &str) -> Option<(&str, &str)> {
    let s = s.trim();
    let start = s.find('<')?;
    let end = s.rfind('>')?;
    if end <= start {
        return None;
    }
    Some((s[..start].trim(), s[start + 1..end].trim()))
}
