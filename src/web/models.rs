use log::info;
use serde::{Deserialize, Serialize};

use crate::model::prompts::SpiritualLevel;

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 120;
pub const MIN_BOOK_COUNT: u32 = 1;
pub const MAX_BOOK_COUNT: u32 = 10;

fn default_duration() -> u32 {
    15
}

fn default_level() -> String {
    "beginner".to_string()
}

fn default_count() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
pub struct QuietTimeRequest {
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default)]
    pub focus_area: Option<String>,
}

impl QuietTimeRequest {
    pub fn duration_minutes(&self) -> u32 {
        clamp_logged("duration", self.duration, MIN_DURATION_MINUTES, MAX_DURATION_MINUTES)
    }
}

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default = "default_level")]
    pub spiritual_level: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

impl BookRequest {
    pub fn level(&self) -> SpiritualLevel {
        SpiritualLevel::from_label(&self.spiritual_level)
    }

    pub fn book_count(&self) -> u32 {
        clamp_logged("count", self.count, MIN_BOOK_COUNT, MAX_BOOK_COUNT)
    }
}

#[derive(Debug, Deserialize)]
pub struct BibleStudyRequest {
    pub passage: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl QuestionRequest {
    /// The question, if one was given with any non-whitespace content.
    pub fn question(&self) -> Option<&str> {
        self.question
            .as_deref()
            .filter(|q| !q.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AssistantResponse {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl AssistantResponse {
    pub fn result(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            error: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

fn clamp_logged(field: &str, value: u32, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        info!("Clamping {} from {} to {}", field, value, clamped);
    }
    clamped
}
