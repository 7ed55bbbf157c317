//! Relay between the site chat widget and the external chat service.

use std::time::Duration;

use reqwest::Client;

use crate::errors::AppError;
use crate::models::{ChatMessage, ChatServiceReply};

/// Reply used when the chat service answers without content.
pub const FALLBACK_REPLY: &str = "Desculpe, não consegui processar sua mensagem.";

/// Forwards visitor messages to the configured chat service, one request per message.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    client: Client,
    endpoint: Option<String>,
}

impl ChatRelay {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Send `message` to the chat service and return its reply.
    pub async fn relay(&self, message: &ChatMessage) -> Result<ChatMessage, AppError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            return Err(AppError::Unavailable(
                "Chat service is not configured".to_string(),
            ));
        };

        if message.content.trim().is_empty() {
            return Err(AppError::Validation("Message content is required".to_string()));
        }

        tracing::debug!("Relaying chat message to {}", endpoint);

        let response = self.client.post(endpoint).json(message).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::error!("Chat service error: {} - {}", status, text);
            return Err(AppError::Upstream(format!(
                "Chat service returned {}",
                status
            )));
        }

        let reply: ChatServiceReply = response.json().await?;
        let content = reply
            .result
            .response
            .content
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        Ok(ChatMessage { content })
    }
}
