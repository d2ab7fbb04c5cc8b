//! Telegram bot API notifier

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::monitor::report::Report;
use crate::notify::render::render_html;
use crate::notify::{Notifier, NotifyError};

const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// Sends the report to one chat through a Telegram bot.
pub struct TelegramNotifier {
    client: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self::with_base_url(DEFAULT_TELEGRAM_API.to_string(), bot_token, chat_id)
    }

    pub fn with_base_url(base_url: String, bot_token: String, chat_id: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            bot_token,
            chat_id,
        }
    }
}

/// Error envelope of the bot API
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    #[serde(default)]
    description: Option<String>,
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, report: &Report) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let text = render_html(report);
        debug!("Sending Telegram notification ({} chars)", text.len());

        let response = self
            .client
            .post(&url)
            .form(&[
                ("chat_id", self.chat_id.as_str()),
                ("text", text.as_str()),
                ("parse_mode", "HTML"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<TelegramResponse>(&body)
                .ok()
                .and_then(|r| r.description);
            return Err(NotifyError::Api {
                status,
                body: description.unwrap_or(body),
            });
        }
        Ok(())
    }
}
