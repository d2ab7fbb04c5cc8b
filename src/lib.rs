//! Upstream release monitor for Alpine aports packages
//!
//! Scans an aports checkout for APKBUILDs carrying a configured
//! maintainer, asks release-monitoring.org for the latest upstream
//! release of each package and reports what is outdated, current or
//! unknown to the console and optionally to a Telegram chat.

pub mod apkbuild;
pub mod aports;
pub mod config;
pub mod history;
pub mod monitor;
pub mod notify;
pub mod run;
