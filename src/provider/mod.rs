// src/provider/mod.rs — Model provider layer

pub mod google;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::infra::config::ProviderConfig;
use crate::infra::errors::FolioError;
use google::GoogleProvider;

/// Core trait that model providers implement.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, FolioError>;
}

/// Build the Gemini provider from config.
///
/// A missing API key is not an error here: every send fails with
/// `MissingApiKey` instead, which the chat turns into its fallback reply.
pub fn from_config(config: &ProviderConfig) -> Result<Arc<dyn ModelProvider>, FolioError> {
    let api_key = config.resolve_api_key().unwrap_or_else(|| {
        tracing::warn!("no Gemini API key found; chat replies will use the fallback text");
        String::new()
    });

    let provider = match config.request_timeout_secs {
        Some(secs) => GoogleProvider::with_timeout(api_key, Duration::from_secs(secs))?,
        None => GoogleProvider::new(api_key),
    };
    Ok(Arc::new(provider))
}

#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub system: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub usage: TokenUsage,
    pub stop_reason: StopReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    Safety,
    #[default]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_usage_total() {
        let u = TokenUsage {
            input_tokens: 100,
            output_tokens: 50,
        };
        assert_eq!(u.total(), 150);
    }

    #[test]
    fn test_token_usage_default() {
        assert_eq!(TokenUsage::default().total(), 0);
    }

    #[test]
    fn test_message_user() {
        let m = Message::user("Hello");
        assert_eq!(m.role, Role::User);
        assert_eq!(m.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let m = Message::assistant("Sure!");
        assert_eq!(m.role, Role::Assistant);
    }

    #[test]
    fn test_from_config_builds_google() {
        let config = ProviderConfig {
            request_timeout_secs: Some(5),
            ..ProviderConfig::default()
        };
        let provider = from_config(&config).unwrap();
        assert_eq!(provider.id(), "google");
        assert_eq!(provider.name(), "Google");
    }

    #[test]
    fn test_stop_reason_default() {
        assert!(matches!(StopReason::default(), StopReason::Unknown));
    }
}
