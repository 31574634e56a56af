use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 8844;
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Runtime settings, resolved once at startup and passed explicitly to the
/// pieces that need them
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub bot_token: String,
    pub chat_id: String,
    pub port: u16,
    pub telegram_api_base: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .context("TELEGRAM_BOT_TOKEN is not set, create a bot with @BotFather and export its token")?;

        let chat_id = env::var("ALERT_CHAT_ID")
            .context("ALERT_CHAT_ID is not set, export the chat id the alerts should be sent to")?;

        let port = match env::var("PORT") {
            Ok(value) => value.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let telegram_api_base = env::var("TELEGRAM_API_BASE")
            .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_BASE.to_string());

        Ok(Self {
            bot_token,
            chat_id,
            port,
            telegram_api_base,
        })
    }
}
