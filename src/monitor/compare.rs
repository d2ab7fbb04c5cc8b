//! Version comparison for APKBUILD-style version strings.
//!
//! Upstream projects rarely publish strict semver, so versions are
//! compared as dot-separated numeric segments with an optional trailing
//! suffix. Shorter segment lists are padded with zeros (`1.2` equals
//! `1.2.0`) and a release without a suffix ranks above the same release
//! with one (`1.0` is newer than `1.0_rc1`). Suffixes order by their
//! alphabetic part, then by any trailing number (`1.0_rc2` is older
//! than `1.0_rc10`).

use std::cmp::Ordering;

/// Outcome of comparing a packaged version against the upstream one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Same,
    UpstreamNewer,
    UpstreamOlder,
    /// One of the two strings did not parse as a version.
    Invalid,
}

/// A parsed version: numeric segments plus an optional suffix.
#[derive(Debug, Clone)]
pub struct PackageVersion {
    segments: Vec<u64>,
    suffix: Option<String>,
}

impl PackageVersion {
    /// Parses a raw version string, normalizing it first.
    ///
    /// Normalization trims whitespace, drops a leading `v`/`V` when a
    /// digit follows, and treats `-` like `.` so `1.2.3-r1` and
    /// `1.2.3.r1` read the same. Returns `None` when no numeric
    /// segment can be found, a segment is empty or a segment overflows.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let trimmed = match trimmed.strip_prefix(['v', 'V']) {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
            _ => trimmed,
        };
        if trimmed.is_empty() {
            return None;
        }

        let normalized = trimmed.replace('-', ".");
        let mut segments = Vec::new();
        let mut suffix_parts: Vec<&str> = Vec::new();

        for part in normalized.split(['.', '_']) {
            if part.is_empty() {
                return None;
            }
            if !suffix_parts.is_empty() {
                suffix_parts.push(part);
                continue;
            }
            match part.find(|c: char| !c.is_ascii_digit()) {
                None => segments.push(part.parse().ok()?),
                Some(0) => suffix_parts.push(part),
                Some(boundary) => {
                    segments.push(part[..boundary].parse().ok()?);
                    suffix_parts.push(&part[boundary..]);
                }
            }
        }

        if segments.is_empty() {
            return None;
        }
        let suffix = (!suffix_parts.is_empty()).then(|| suffix_parts.join("."));
        Some(Self { segments, suffix })
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        match (&self.suffix, &other.suffix) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => suffix_key(a).cmp(&suffix_key(b)),
        }
    }
}

/// Ordering key for a suffix: the alphabetic head compares lexically,
/// any trailing number compares numerically (`rc2` before `rc10`).
fn suffix_key(suffix: &str) -> (&str, Option<(usize, &str)>) {
    let head = suffix.trim_end_matches(|c: char| c.is_ascii_digit());
    if head.len() == suffix.len() {
        return (head, None);
    }
    // Compared as (digit count, digits); leading zeros are stripped so
    // the count reflects magnitude.
    let number = suffix[head.len()..].trim_start_matches('0');
    (head, Some((number.len(), number)))
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

/// Compares a declared package version against the latest upstream one.
pub fn compare(declared: &str, upstream: &str) -> CompareResult {
    let (Some(declared), Some(upstream)) =
        (PackageVersion::parse(declared), PackageVersion::parse(upstream))
    else {
        return CompareResult::Invalid;
    };
    match upstream.cmp(&declared) {
        Ordering::Greater => CompareResult::UpstreamNewer,
        Ordering::Less => CompareResult::UpstreamOlder,
        Ordering::Equal => CompareResult::Same,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", &[1, 2, 3], None)]
    #[case("v1.2.3", &[1, 2, 3], None)]
    #[case("V20.1", &[20, 1], None)]
    #[case("1.2.3-r1", &[1, 2, 3], Some("r1"))]
    #[case("2.1.0_rc1", &[2, 1, 0], Some("rc1"))]
    #[case("1.0_beta.2", &[1, 0], Some("beta.2"))]
    #[case("1.2b", &[1, 2], Some("b"))]
    #[case("  3.4 ", &[3, 4], None)]
    fn parse_splits_segments_and_suffix(
        #[case] raw: &str,
        #[case] segments: &[u64],
        #[case] suffix: Option<&str>,
    ) {
        let version = PackageVersion::parse(raw).unwrap();
        assert_eq!(version.segments, segments);
        assert_eq!(version.suffix.as_deref(), suffix);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("version1")]
    #[case("1..2")]
    #[case("1.2.")]
    #[case("rc1.2")]
    #[case("18446744073709551616")]
    fn parse_rejects_invalid_strings(#[case] raw: &str) {
        assert!(PackageVersion::parse(raw).is_none());
    }

    #[test]
    fn leading_v_needs_a_digit() {
        assert!(PackageVersion::parse("vanilla").is_none());
        let version = PackageVersion::parse("v2").unwrap();
        assert_eq!(version.segments, vec![2]);
    }

    #[rstest]
    #[case("0.18.1", "1.7.2", CompareResult::UpstreamNewer)]
    #[case("1.6.1", "1.6.1", CompareResult::Same)]
    #[case("2.0", "1.9", CompareResult::UpstreamOlder)]
    #[case("1.2", "1.2.0", CompareResult::Same)]
    #[case("1.2.3", "1.2.3.1", CompareResult::UpstreamNewer)]
    #[case("1.2-4", "1.2.4", CompareResult::Same)]
    #[case("1.0", "v1.0", CompareResult::Same)]
    #[case("9.9", "10.0", CompareResult::UpstreamNewer)]
    fn compare_orders_numeric_segments(
        #[case] declared: &str,
        #[case] upstream: &str,
        #[case] expected: CompareResult,
    ) {
        assert_eq!(compare(declared, upstream), expected);
    }

    #[rstest]
    #[case("1.0_rc1", "1.0", CompareResult::UpstreamNewer)]
    #[case("1.0", "1.0_rc1", CompareResult::UpstreamOlder)]
    #[case("1.0_rc1", "1.0_rc2", CompareResult::UpstreamNewer)]
    #[case("1.0_rc1", "1.0_rc1", CompareResult::Same)]
    #[case("1.2.3", "1.2.3-r1", CompareResult::UpstreamOlder)]
    fn compare_ranks_plain_release_above_suffixed(
        #[case] declared: &str,
        #[case] upstream: &str,
        #[case] expected: CompareResult,
    ) {
        assert_eq!(compare(declared, upstream), expected);
    }

    #[rstest]
    #[case("1.0_rc2", "1.0_rc10", CompareResult::UpstreamNewer)]
    #[case("1.0_rc10", "1.0_rc2", CompareResult::UpstreamOlder)]
    #[case("1.0_beta.9", "1.0_beta.10", CompareResult::UpstreamNewer)]
    #[case("2.0_p9", "2.0_p11", CompareResult::UpstreamNewer)]
    #[case("1.0_alpha", "1.0_alpha1", CompareResult::UpstreamNewer)]
    fn compare_orders_suffix_numbers_numerically(
        #[case] declared: &str,
        #[case] upstream: &str,
        #[case] expected: CompareResult,
    ) {
        assert_eq!(compare(declared, upstream), expected);
    }

    #[rstest]
    #[case("abc", "1.0")]
    #[case("1.0", "abc")]
    #[case("", "")]
    fn compare_flags_unparseable_input(#[case] declared: &str, #[case] upstream: &str) {
        assert_eq!(compare(declared, upstream), CompareResult::Invalid);
    }

    const SAMPLES: &[&str] = &[
        "0.18.1",
        "1.0",
        "v1.0",
        "1.0_alpha",
        "1.0_beta",
        "1.0_beta.2",
        "1.0_rc1",
        "1.0_rc2",
        "1.0_rc10",
        "1.2",
        "1.2.0",
        "1.2.3",
        "1.2.3-r1",
        "1.2.3.1",
        "1.7.2",
        "2.0",
        "2.0_p9",
        "2.0_p11",
        "9.9",
        "10.0",
    ];

    #[test]
    fn compare_inverts_under_operand_swap() {
        for &a in SAMPLES {
            for &b in SAMPLES {
                let expected = match compare(a, b) {
                    CompareResult::UpstreamNewer => CompareResult::UpstreamOlder,
                    CompareResult::UpstreamOlder => CompareResult::UpstreamNewer,
                    other => other,
                };
                assert_eq!(compare(b, a), expected, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn ordering_is_transitive_across_samples() {
        let versions: Vec<PackageVersion> = SAMPLES
            .iter()
            .map(|raw| PackageVersion::parse(raw).unwrap())
            .collect();
        for (i, a) in versions.iter().enumerate() {
            for (j, b) in versions.iter().enumerate() {
                for (k, c) in versions.iter().enumerate() {
                    if a <= b && b <= c {
                        assert!(a <= c, "{} <= {} <= {}", SAMPLES[i], SAMPLES[j], SAMPLES[k]);
                    }
                }
            }
        }
    }
}
