use crate::configuration::Settings;
use crate::traits::NotificationSender;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Parse mode selecting the dialect the escaper targets
pub const PARSE_MODE_MARKDOWN_V2: &str = "MarkdownV2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Telegram Bot API implementation of NotificationSender
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_token: String,
}

impl TelegramNotifier {
    pub fn new(api_base: &str, bot_token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build the Telegram HTTP client")?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.telegram_api_base, &settings.bot_token)
    }

    /// Raw sendMessage call, the parse_mode key is omitted from the request
    /// body entirely when no mode is given
    #[tracing::instrument(name = "send_message", skip(self, text))]
    pub async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        parse_mode: Option<&str>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);

        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(mode) = parse_mode {
            body["parse_mode"] = json!(mode);
        }

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to reach the Telegram API")?;

        debug!("Telegram response status: {}", response.status());

        Ok(response)
    }
}

#[async_trait]
impl NotificationSender for TelegramNotifier {
    async fn send(&self, chat_id: &str, text: &str) -> Result<()> {
        let response = self
            .send_message(chat_id, text, Some(PARSE_MODE_MARKDOWN_V2))
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Telegram API rejected the message: {} {}", status, body);
        }

        Ok(())
    }
}
