//! Chat relay payloads.

use serde::{Deserialize, Serialize};

/// A single chat message, used both for the visitor's input and the relayed reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

/// Envelope returned by the external chat service.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatServiceReply {
    pub result: ChatServiceResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatServiceResult {
    pub response: ChatServiceResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatServiceResponse {
    #[serde(default)]
    pub content: Option<String>,
}
