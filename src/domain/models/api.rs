use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Language;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub language: Language,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[async_trait]
pub trait ChatApi {
    /// Sends one user message to the remote assistant. Any transport failure,
    /// non-success status or undecodable body is an error.
    async fn query(&self, req: &ChatRequest) -> Result<ChatResponse>;
}
