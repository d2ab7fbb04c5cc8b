//! Aggregated results of one monitoring run

use indexmap::IndexMap;

use crate::monitor::classifier::{Classification, Outcome};

/// One package line within a report category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub detail: String,
}

/// Check results grouped into the five fixed categories.
///
/// Every category is always present, in the same order, so two runs
/// render with the same section layout. Entries within a category are
/// sorted by package name, case-insensitively.
#[derive(Debug)]
pub struct Report {
    categories: IndexMap<Outcome, Vec<ReportEntry>>,
}

impl Report {
    pub fn new() -> Self {
        let mut categories = IndexMap::new();
        for outcome in Outcome::ALL {
            categories.insert(outcome, Vec::new());
        }
        Self { categories }
    }

    pub fn from_classifications(
        items: impl IntoIterator<Item = (String, Classification)>,
    ) -> Self {
        let mut report = Self::new();
        for (name, classification) in items {
            report
                .categories
                .entry(classification.outcome)
                .or_default()
                .push(ReportEntry {
                    name,
                    detail: classification.detail,
                });
        }
        for entries in report.categories.values_mut() {
            entries.sort_by_key(|entry| entry.name.to_lowercase());
        }
        report
    }

    /// Categories in presentation order, empty ones included.
    pub fn categories(&self) -> impl Iterator<Item = (Outcome, &[ReportEntry])> {
        self.categories
            .iter()
            .map(|(outcome, entries)| (*outcome, entries.as_slice()))
    }

    pub fn entries(&self, outcome: Outcome) -> &[ReportEntry] {
        self.categories
            .get(&outcome)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|entries| entries.is_empty())
    }

    pub fn total(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
