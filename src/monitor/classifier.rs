//! Turns a lookup result into one of the report categories

use chrono::{DateTime, Duration, Utc};

use crate::apkbuild::PackageRecord;
use crate::history::CheckState;
use crate::monitor::compare::{CompareResult, compare};
use crate::monitor::resolver::ResolvedUpstream;

/// Report category for one checked package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    UpgradeAvailable,
    UpToDate,
    NoVersionFound,
    DowngradeDetected,
    InvalidVersionFormat,
}

impl Outcome {
    /// Every category, in report presentation order.
    pub const ALL: [Outcome; 5] = [
        Outcome::UpgradeAvailable,
        Outcome::UpToDate,
        Outcome::NoVersionFound,
        Outcome::DowngradeDetected,
        Outcome::InvalidVersionFormat,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Outcome::UpgradeAvailable => "Upgrade available",
            Outcome::UpToDate => "Up to date",
            Outcome::NoVersionFound => "No version found",
            Outcome::DowngradeDetected => "Downgrade detected",
            Outcome::InvalidVersionFormat => "Invalid version format",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Outcome::UpgradeAvailable => "🚀",
            Outcome::UpToDate => "✅",
            Outcome::NoVersionFound => "❌",
            Outcome::DowngradeDetected => "⚠️",
            Outcome::InvalidVersionFormat => "❌",
        }
    }
}

/// Category plus the human-readable detail line for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub outcome: Outcome,
    pub detail: String,
}

/// Classifies a package against what the upstream lookup returned.
///
/// When the hit came through an APKBUILD alias the detail notes the
/// name that matched.
pub fn classify(record: &PackageRecord, resolved: Option<&ResolvedUpstream>) -> Classification {
    let Some(resolved) = resolved else {
        return Classification {
            outcome: Outcome::NoVersionFound,
            detail: "no upstream version found".to_string(),
        };
    };

    let declared = &record.declared_version;
    let upstream = &resolved.latest_version;
    let (outcome, mut detail) = match compare(declared, upstream) {
        CompareResult::UpstreamNewer => (
            Outcome::UpgradeAvailable,
            format!("{} -> {}", declared, upstream),
        ),
        CompareResult::Same => (Outcome::UpToDate, declared.clone()),
        CompareResult::UpstreamOlder => (
            Outcome::DowngradeDetected,
            format!("{} -> {}", declared, upstream),
        ),
        CompareResult::Invalid => (
            Outcome::InvalidVersionFormat,
            format!("declared: {}, upstream: {}", declared, upstream),
        ),
    };

    if resolved.matched_name != record.name {
        detail.push_str(&format!(" (via {})", resolved.matched_name));
    }

    Classification { outcome, detail }
}

/// Whether a package is due for a fresh check.
///
/// An interval of zero disables skipping. A package with no recorded
/// state is always due. Otherwise it is due once at least
/// `interval_days` have passed since the last check.
pub fn should_check(state: Option<&CheckState>, interval_days: u64, now: DateTime<Utc>) -> bool {
    if interval_days == 0 {
        return true;
    }
    let Some(state) = state else {
        return true;
    };
    // An interval chrono cannot represent can never have elapsed.
    match i64::try_from(interval_days).ok().and_then(Duration::try_days) {
        Some(window) => now.signed_duration_since(state.last_checked) >= window,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn record(name: &str, declared: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            declared_version: declared.to_string(),
            alt_names: vec![],
        }
    }

    fn resolved(version: &str, matched_name: &str) -> ResolvedUpstream {
        ResolvedUpstream {
            latest_version: version.to_string(),
            matched_name: matched_name.to_string(),
        }
    }

    #[rstest]
    #[case("0.18.1", "1.7.2", Outcome::UpgradeAvailable, "0.18.1 -> 1.7.2")]
    #[case("1.6.1", "1.6.1", Outcome::UpToDate, "1.6.1")]
    #[case("2.0", "1.9", Outcome::DowngradeDetected, "2.0 -> 1.9")]
    #[case(
        "abc",
        "1.0",
        Outcome::InvalidVersionFormat,
        "declared: abc, upstream: 1.0"
    )]
    fn classify_maps_comparison_to_category(
        #[case] declared: &str,
        #[case] upstream: &str,
        #[case] outcome: Outcome,
        #[case] detail: &str,
    ) {
        let record = record("pkg", declared);
        let classification = classify(&record, Some(&resolved(upstream, "pkg")));
        assert_eq!(classification.outcome, outcome);
        assert_eq!(classification.detail, detail);
    }

    #[test]
    fn classify_without_upstream_is_no_version_found() {
        let classification = classify(&record("pkg", "1.0"), None);
        assert_eq!(classification.outcome, Outcome::NoVersionFound);
        assert_eq!(classification.detail, "no upstream version found");
    }

    #[test]
    fn classify_notes_alias_hits() {
        let record = record("py3-requests", "2.31.0");
        let classification = classify(&record, Some(&resolved("2.32.5", "requests")));
        assert_eq!(classification.detail, "2.31.0 -> 2.32.5 (via requests)");
    }

    #[test]
    fn classify_skips_alias_note_for_primary_name() {
        let record = record("htop", "3.3.0");
        let classification = classify(&record, Some(&resolved("3.3.0", "htop")));
        assert_eq!(classification.detail, "3.3.0");
    }

    #[rstest]
    #[case(Outcome::UpgradeAvailable, "🚀", "Upgrade available")]
    #[case(Outcome::UpToDate, "✅", "Up to date")]
    #[case(Outcome::NoVersionFound, "❌", "No version found")]
    #[case(Outcome::DowngradeDetected, "⚠️", "Downgrade detected")]
    #[case(Outcome::InvalidVersionFormat, "❌", "Invalid version format")]
    fn outcome_markers_and_titles(
        #[case] outcome: Outcome,
        #[case] marker: &str,
        #[case] title: &str,
    ) {
        assert_eq!(outcome.marker(), marker);
        assert_eq!(outcome.title(), title);
    }

    #[test]
    fn outcome_order_puts_downgrades_before_invalid_formats() {
        assert_eq!(
            Outcome::ALL,
            [
                Outcome::UpgradeAvailable,
                Outcome::UpToDate,
                Outcome::NoVersionFound,
                Outcome::DowngradeDetected,
                Outcome::InvalidVersionFormat,
            ]
        );
    }

    fn state(last_checked: DateTime<Utc>) -> CheckState {
        CheckState {
            last_checked,
            declared_version: "1.0".to_string(),
            latest_version: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn should_check_always_when_interval_is_zero() {
        let recent = state(now());
        assert!(should_check(Some(&recent), 0, now()));
    }

    #[test]
    fn should_check_without_state() {
        assert!(should_check(None, 7, now()));
    }

    #[rstest]
    #[case(7, 7, true)]
    #[case(7, 8, true)]
    #[case(7, 6, false)]
    #[case(30, 1, false)]
    fn should_check_honors_elapsed_days(
        #[case] interval_days: u64,
        #[case] elapsed_days: i64,
        #[case] expected: bool,
    ) {
        let checked = state(now() - Duration::days(elapsed_days));
        assert_eq!(should_check(Some(&checked), interval_days, now()), expected);
    }

    #[test]
    fn should_check_skips_future_timestamps() {
        let future = state(now() + Duration::days(1));
        assert!(!should_check(Some(&future), 7, now()));
    }

    #[test]
    fn should_check_skips_for_intervals_beyond_chrono_range() {
        let checked = state(now() - Duration::days(365));
        assert!(!should_check(Some(&checked), 10_000_000_000_000, now()));
        assert!(!should_check(Some(&checked), u64::MAX, now()));
    }
}
