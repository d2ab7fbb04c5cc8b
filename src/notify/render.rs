//! Report rendering
//!
//! Both renderers emit one section per category, empty sections
//! included, in the fixed category order, separated by a blank line.

use crate::monitor::report::Report;

/// Renders the report as plain text for the console.
pub fn render_plain(report: &Report) -> String {
    let mut sections = Vec::new();
    for (outcome, entries) in report.categories() {
        let mut lines = vec![format!("{} {}:", outcome.marker(), outcome.title())];
        for entry in entries {
            lines.push(format!("  {}: {}", entry.name, entry.detail));
        }
        sections.push(lines.join("\n"));
    }
    sections.join("\n\n")
}

/// Renders the report as the HTML subset Telegram accepts.
pub fn render_html(report: &Report) -> String {
    let mut sections = Vec::new();
    for (outcome, entries) in report.categories() {
        let mut lines = vec![format!(
            "<b>{} {}</b>",
            outcome.marker(),
            escape_html(outcome.title())
        )];
        for entry in entries {
            lines.push(format!(
                "{}: {}",
                escape_html(&entry.name),
                escape_html(&entry.detail)
            ));
        }
        sections.push(lines.join("\n"));
    }
    sections.join("\n\n")
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
