pub mod error;
pub mod prompts;

use anyhow::Result;
use log::{debug, info, warn};
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::CompletionSettings;
use crate::web::models::{Message, Role};
pub use error::AssistantError;
use prompts::{SpiritualLevel, SYSTEM_PROMPT};

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(model: &str, user_message: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: Role::User,
                    content: user_message.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl CompletionResponse {
    pub fn into_text(self) -> Result<String, AssistantError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AssistantError::Response("response contained no choices".to_string()))
    }
}

// Client for the chat-completion provider; every call pairs the system prompt with one user message.
pub struct Assistant {
    settings: CompletionSettings,
    client: Client,
}

impl Assistant {
    pub fn new(settings: CompletionSettings) -> Result<Self> {
        info!(
            "Using completion endpoint {} with model {} (timeout {:?}, retries {})",
            settings.api_url, settings.model, settings.timeout, settings.max_retries
        );

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self { settings, client })
    }

    /// Sends `user_message` and always yields displayable text: the model's
    /// answer, or the rendered error.
    pub async fn get_response(&self, user_message: &str) -> String {
        self.complete(user_message)
            .await
            .unwrap_or_else(|e| e.to_string())
    }

    pub async fn complete(&self, user_message: &str) -> Result<String, AssistantError> {
        debug!("Prompt: {}", user_message);
        let request = CompletionRequest::new(&self.settings.model, user_message);

        let mut attempt = 0;
        loop {
            match self.send(&request).await {
                Err(e) if e.is_retryable() && attempt < self.settings.max_retries => {
                    attempt += 1;
                    let delay = self.backoff();
                    warn!("Completion attempt {} failed, retrying in {:?}: {}", attempt, delay, e);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    warn!("Completion failed: {}", e);
                    return Err(e);
                }
                Ok(content) => {
                    info!("Response length: {} characters", content.len());
                    return Ok(content);
                }
            }
        }
    }

    async fn send(&self, request: &CompletionRequest) -> Result<String, AssistantError> {
        let response = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::Status { status, body });
        }

        let body = response.text().await?;
        debug!("Response body: {}", body);

        serde_json::from_str::<CompletionResponse>(&body)
            .map_err(|e| AssistantError::Response(e.to_string()))?
            .into_text()
    }

    fn backoff(&self) -> Duration {
        let base = self.settings.retry_backoff.as_millis() as u64;
        let jitter = rand::thread_rng().gen_range(0..=base / 2);
        Duration::from_millis(base + jitter)
    }

    pub async fn quiet_time_plan(
        &self,
        duration_minutes: u32,
        focus_area: Option<&str>,
    ) -> Result<String, AssistantError> {
        self.complete(&prompts::quiet_time_prompt(duration_minutes, focus_area))
            .await
    }

    pub async fn recommend_books(
        &self,
        topic: Option<&str>,
        level: SpiritualLevel,
        count: u32,
    ) -> Result<String, AssistantError> {
        self.complete(&prompts::book_prompt(topic, level, count)).await
    }

    pub async fn bible_study_guide(&self, passage: &str) -> Result<String, AssistantError> {
        self.complete(&prompts::bible_study_prompt(passage)).await
    }

    pub async fn answer_question(&self, question: &str) -> Result<String, AssistantError> {
        self.complete(&prompts::question_prompt(question)).await
    }
}
