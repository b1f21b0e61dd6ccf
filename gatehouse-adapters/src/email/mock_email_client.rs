use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{Email, EmailClient};

/// Delivery record kept by [`MockEmailClient`].
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: Email,
    pub subject: String,
    pub content: String,
}

/// Records messages instead of delivering them, so tests can read the
/// OTP code that would have been mailed.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }

    pub async fn last_sent(&self) -> Option<SentEmail> {
        self.sent.read().await.last().cloned()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        self.sent.write().await.push(SentEmail {
            recipient: recipient.clone(),
            subject: subject.to_owned(),
            content: content.to_owned(),
        });
        Ok(())
    }
}
