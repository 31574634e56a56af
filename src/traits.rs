use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Trait for delivering formatted messages to a chat destination
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a message to the given chat, delivery failures are logged and
    /// never retried
    async fn send(&self, chat_id: &str, text: &str) -> Result<()>;
}
