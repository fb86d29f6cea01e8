// src/infra/errors.rs — Error types for folio

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    // Provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    #[error("Rate limited by '{provider}'")]
    RateLimited { provider: String },

    // User errors
    #[error("No API key configured. Set GEMINI_API_KEY or [provider].api_key in config.toml.")]
    MissingApiKey,

    #[error("Profile error: {0}")]
    Profile(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
