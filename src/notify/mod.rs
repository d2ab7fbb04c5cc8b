//! Report delivery
//!
//! A finished [`Report`](crate::monitor::report::Report) is rendered
//! once per channel: plain text on the console, Telegram-flavored HTML
//! for the bot API.
//!
//! # Modules
//!
//! - [`render`]: Pure text and HTML rendering
//! - [`console`]: Standard output notifier
//! - [`telegram`]: Telegram bot API notifier

pub mod console;
pub mod render;
pub mod telegram;

use thiserror::Error;

use crate::monitor::report::Report;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Notification API returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Trait for delivering a finished report over one channel
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, report: &Report) -> Result<(), NotifyError>;
}
