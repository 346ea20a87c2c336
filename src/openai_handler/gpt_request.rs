use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GPTRequest {
    pub model: String,
    pub messages: Vec<GPTMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GPTMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct GPTResponse {
    pub choices: Vec<GPTChoice>,
}

#[derive(Debug, Deserialize)]
pub struct GPTChoice {
    pub message: GPTMessageResponse,
}

#[derive(Debug, Deserialize)]
pub struct GPTMessageResponse {
    pub content: Option<String>,
}

impl GPTResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct GptRequestConfig {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GptRequestConfig {
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn to_request(&self) -> GPTRequest {
        GPTRequest {
            model: self.model.clone(),
            messages: vec![
                GPTMessage {
                    role: "system".to_string(),
                    content: self.system_prompt.clone(),
                },
                GPTMessage {
                    role: "user".to_string(),
                    content: self.user_prompt.clone(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
