// src/services/ollama.rs
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatPayload<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
}

impl<'a> ChatPayload<'a> {
    pub fn new(model: &'a str, user_message: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage { role: Role::System, content: SYSTEM_PROMPT },
                ChatMessage { role: Role::User, content: user_message },
            ],
            stream: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    chat_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: impl Into<String>) -> reqwest::Result<Self> {
        Self::with_timeout(base_url, model, UPSTREAM_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            chat_url: chat_url(base_url),
            model: model.into(),
        })
    }

    /// Sends one non-streaming chat turn and returns the assistant's text.
    pub async fn chat(&self, user_message: &str) -> Result<String, AppError> {
        let payload = ChatPayload::new(&self.model, user_message);

        tracing::debug!(url = %self.chat_url, model = %self.model, "calling ollama");

        let response = self
            .http
            .post(&self.chat_url)
            .json(&payload)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(transport_error)?;

        let body: Value = response.json().await.map_err(transport_error)?;

        extract_content(&body)
    }
}

fn chat_url(base_url: &str) -> String {
    format!("{}/api/chat", base_url.trim_end_matches('/'))
}

// Builder errors mean we never got as far as the network.
fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_builder() {
        AppError::Internal(err.to_string())
    } else {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

/// Pulls `message.content` out of an Ollama chat response.
pub fn extract_content(body: &Value) -> Result<String, AppError> {
    let message = match body.get("message") {
        Some(Value::Object(message)) => message,
        Some(_) => {
            return Err(AppError::UpstreamMalformed(
                "'message' is not an object".to_string(),
            ));
        }
        None => return Err(AppError::UpstreamMalformed("missing 'message'".to_string())),
    };

    match message.get("content") {
        Some(Value::String(content)) => Ok(content.clone()),
        Some(_) => Err(AppError::UpstreamMalformed(
            "'content' is not a string".to_string(),
        )),
        None => Err(AppError::UpstreamMalformed("missing 'content'".to_string())),
    }
}
