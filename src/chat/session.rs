// src/chat/session.rs — Lazily created conversational session with the model.

use chrono::{DateTime, Utc};
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::chat::persona;
use crate::infra::config::Config;
use crate::infra::errors::FolioError;
use crate::profile::Profile;
use crate::provider::{ChatRequest, Message, ModelProvider};

/// Fixed settings every session is created with.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub model: String,
    pub temperature: f32,
    pub system_instruction: String,
    pub fallback: String,
    pub placeholder: String,
}

impl SessionConfig {
    pub fn from_config(profile: &Profile, config: &Config) -> Result<Self, FolioError> {
        Ok(Self {
            model: config.provider.model.clone(),
            temperature: config.provider.temperature,
            system_instruction: persona::build_system_instruction(profile)?,
            fallback: config.chat.fallback.clone(),
            placeholder: config.chat.placeholder.clone(),
        })
    }
}

/// Conversation context held across turns. The history is resent on every
/// request; an exchange is only recorded once the model has answered it.
pub struct ChatSession {
    id: String,
    created_at: DateTime<Utc>,
    model: String,
    system_instruction: String,
    temperature: f32,
    history: Mutex<Vec<Message>>,
}

impl ChatSession {
    fn new(config: &SessionConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            model: config.model.clone(),
            system_instruction: config.system_instruction.clone(),
            temperature: config.temperature,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Number of recorded messages (two per answered turn).
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    /// Send `text` with the accumulated context and return the raw reply.
    ///
    /// The history lock is held for the whole round trip, so turns of one
    /// session never interleave.
    pub async fn send(
        &self,
        provider: &dyn ModelProvider,
        text: &str,
    ) -> Result<String, FolioError> {
        let mut history = self.history.lock().await;

        let mut messages = history.clone();
        messages.push(Message::user(text));

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: None,
            temperature: Some(self.temperature),
            system: Some(self.system_instruction.clone()),
        };

        let response = provider.chat(request).await?;

        if !response.content.is_empty() {
            history.push(Message::user(text));
            history.push(Message::assistant(response.content.clone()));
        }
        Ok(response.content)
    }
}

/// Owns the single chat session and turns every failure into copy the user
/// can read.
pub struct SessionManager {
    provider: Arc<dyn ModelProvider>,
    config: SessionConfig,
    session: OnceLock<ChatSession>,
}

impl SessionManager {
    pub fn new(provider: Arc<dyn ModelProvider>, config: SessionConfig) -> Self {
        Self {
            provider,
            config,
            session: OnceLock::new(),
        }
    }

    pub fn from_config(
        provider: Arc<dyn ModelProvider>,
        profile: &Profile,
        config: &Config,
    ) -> Result<Self, FolioError> {
        Ok(Self::new(provider, SessionConfig::from_config(profile, config)?))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Whether the first message has been sent yet.
    pub fn is_started(&self) -> bool {
        self.session.get().is_some()
    }

    /// The live session, if one was created.
    pub fn session(&self) -> Option<&ChatSession> {
        self.session.get()
    }

    fn session_or_init(&self) -> &ChatSession {
        self.session.get_or_init(|| {
            let session = ChatSession::new(&self.config);
            tracing::info!(
                session = %session.id(),
                model = %session.model(),
                provider = %self.provider.id(),
                "chat session created"
            );
            session
        })
    }

    /// Send one user turn and return the text to show for it.
    ///
    /// Always yields a string: the model's reply, the placeholder when the
    /// reply is empty, or the fallback when the call failed.
    pub async fn send_message(&self, text: &str) -> String {
        let session = self.session_or_init();

        match session.send(self.provider.as_ref(), text).await {
            Ok(reply) if reply.is_empty() => {
                tracing::warn!(session = %session.id(), "model returned no text");
                self.config.placeholder.clone()
            }
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(session = %session.id(), error = %e, "chat request failed");
                self.config.fallback.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::{DEFAULT_FALLBACK, DEFAULT_PLACEHOLDER};

    #[test]
    fn test_session_config_from_defaults() {
        let cfg = SessionConfig::from_config(&Profile::default(), &Config::default()).unwrap();
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert!((cfg.temperature - 0.7).abs() < 0.001);
        assert_eq!(cfg.fallback, DEFAULT_FALLBACK);
        assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
        assert!(cfg.system_instruction.contains("Jesse Van Den Berghe"));
    }

    #[test]
    fn test_session_not_started_until_first_send() {
        let provider = Arc::new(crate::provider::google::GoogleProvider::new(String::new()));
        let cfg = SessionConfig::from_config(&Profile::default(), &Config::default()).unwrap();
        let manager = SessionManager::new(provider, cfg);
        assert!(!manager.is_started());
        assert!(manager.session().is_none());
    }

    #[tokio::test]
    async fn test_missing_key_yields_fallback() {
        let provider = Arc::new(crate::provider::google::GoogleProvider::new(String::new()));
        let cfg = SessionConfig::from_config(&Profile::default(), &Config::default()).unwrap();
        let manager = SessionManager::new(provider, cfg);

        let reply = manager.send_message("Hello?").await;
        assert_eq!(reply, DEFAULT_FALLBACK);
        assert!(manager.is_started());
        assert_eq!(manager.session().unwrap().history_len().await, 0);
    }
}
