// src/state.rs
use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::services::ollama::OllamaClient;

pub type SharedState = Arc<AppState>;

/// Read-only for the life of the process.
pub struct AppState {
    pub config: Config,
    pub ollama: OllamaClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let ollama = OllamaClient::new(&config.ollama_url, config.ollama_model.clone())
            .context("failed to build Ollama HTTP client")?;
        Ok(Self { config, ollama })
    }

    pub fn with_client(config: Config, ollama: OllamaClient) -> Self {
        Self { config, ollama }
    }
}
