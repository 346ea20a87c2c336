use async_trait::async_trait;
use reqwest::Client;

use crate::entities::error::{DataCreatorError, ErrorType};
use crate::environment;

use super::gpt_request::{GPTResponse, GptRequestConfig};

/// What went over the wire for one completion call.
#[derive(Debug, Clone)]
pub struct CompletionOutput {
    pub model: String,
    pub request_url: String,
    pub request: String,
    pub status_code: u16,
    pub response: String,
    pub content: Option<String>,
}

impl CompletionOutput {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The assistant text, or the reason there is none.
    pub fn text(&self) -> Result<&str, DataCreatorError> {
        if !self.is_success() {
            return Err(DataCreatorError::new(
                502,
                ErrorType::LlmError,
                format!("GPT API error ({}): {}", self.status_code, self.response),
            ));
        }
        self.content.as_deref().ok_or_else(|| {
            DataCreatorError::new(
                502,
                ErrorType::LlmError,
                "No response content from GPT".to_string(),
            )
        })
    }
}

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    fn model(&self) -> String;

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<CompletionOutput, DataCreatorError>;
}

#[derive(Clone)]
pub struct GptClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl GptClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
        }
    }

    /// A missing key is only reported when a completion is attempted.
    pub fn from_environment() -> Self {
        Self::new(
            environment::get_openai_api_base_url(),
            environment::get_openai_api_key().ok(),
            environment::get_openai_model(),
        )
    }

    pub fn request_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletion for GptClient {
    fn model(&self) -> String {
        self.model.clone()
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<CompletionOutput, DataCreatorError> {
        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => environment::get_openai_api_key()?,
        };

        let gpt_request = GptRequestConfig::new(self.model.clone(), system_prompt, user_prompt).to_request();
        let request_url = self.request_url();
        let request_json = serde_json::to_string(&gpt_request)?;

        tracing::info!("llm_call_start model={} url={}", self.model, request_url);
        let response = self
            .client
            .post(&request_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&gpt_request)
            .send()
            .await
            .map_err(|e| {
                DataCreatorError::new(502, ErrorType::LlmError, format!("Failed to send request to GPT: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DataCreatorError::new(502, ErrorType::LlmError, format!("Failed to read GPT response: {}", e))
        })?;
        tracing::info!("llm_call_end status={} bytes={}", status.as_u16(), body.len());

        let content = if status.is_success() {
            serde_json::from_str::<GPTResponse>(&body)
                .ok()
                .and_then(|gpt_response| gpt_response.first_content().map(str::to_string))
        } else {
            tracing::warn!("GPT API error ({}): {}", status, body);
            None
        };

        Ok(CompletionOutput {
            model: self.model.clone(),
            request_url,
            request: request_json,
            status_code: status.as_u16(),
            response: body,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Json, http::HeaderMap, http::StatusCode, routing::post, Router};
    use serde_json::{json, Value};

    async fn spawn_fake_api(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", address)
    }

    async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if headers.get("Authorization").and_then(|h| h.to_str().ok()) != Some("Bearer test-key") {
            return (StatusCode::UNAUTHORIZED, Json(json!({"error": {"message": "bad key"}})));
        }
        let content = format!(
            "{}|{}|{}",
            body["model"].as_str().unwrap_or_default(),
            body["messages"][0]["role"].as_str().unwrap_or_default(),
            body["messages"][1]["content"].as_str().unwrap_or_default()
        );
        (
            StatusCode::OK,
            Json(json!({"choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]})),
        )
    }

    #[tokio::test]
    async fn test_complete_posts_chat_request() {
        let base_url = spawn_fake_api(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
        let client = GptClient::new(format!("{}/", base_url), Some("test-key".to_string()), "gpt-test");

        let output = client.complete("system", "ten orders please").await.unwrap();
        assert!(output.is_success());
        assert_eq!(output.request_url, format!("{}/v1/chat/completions", base_url));
        assert_eq!(output.text().unwrap(), "gpt-test|system|ten orders please");
        let request: Value = serde_json::from_str(&output.request).unwrap();
        assert_eq!(request["messages"][1]["content"], "ten orders please");
    }

    #[tokio::test]
    async fn test_error_status_is_kept_and_reported() {
        let base_url = spawn_fake_api(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
        let client = GptClient::new(base_url, Some("wrong-key".to_string()), "gpt-test");

        let output = client.complete("system", "user").await.unwrap();
        assert_eq!(output.status_code, 401);
        assert!(output.response.contains("bad key"));
        let err = output.text().unwrap_err();
        assert_eq!(err.error_type, ErrorType::LlmError);
        assert!(err.message.starts_with("GPT API error (401"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_llm_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let client = GptClient::new(format!("http://{}", address), Some("test-key".to_string()), "gpt-test");

        let err = client.complete("system", "user").await.unwrap_err();
        assert_eq!(err.status_code, 502);
        assert!(err.message.starts_with("Failed to send request to GPT"));
    }

    #[test]
    fn test_success_without_content() {
        let output = CompletionOutput {
            model: "gpt-test".to_string(),
            request_url: "http://localhost/v1/chat/completions".to_string(),
            request: "{}".to_string(),
            status_code: 200,
            response: r#"{"choices":[]}"#.to_string(),
            content: None,
        };
        assert_eq!(output.text().unwrap_err().message, "No response content from GPT");
    }
}
