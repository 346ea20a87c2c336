use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::openai_handler::CompletionOutput;

#[derive(Debug, Serialize, Deserialize, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::llm_calls)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LlmCall {
    pub id: String,
    pub status: String,
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub request: String,
    pub request_url: String,
    pub response: String,
    pub output: String,
    pub table_name: Option<String>,
    pub record_count: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmCallStatus {
    Success,
    ApiError,
    InvalidJson,
}

impl LlmCallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmCallStatus::Success => "success",
            LlmCallStatus::ApiError => "api_error",
            LlmCallStatus::InvalidJson => "invalid_json",
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::llm_calls)]
pub struct NewLlmCall {
    pub id: String,
    pub status: String,
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub request: String,
    pub request_url: String,
    pub response: String,
    pub output: String,
    pub table_name: Option<String>,
    pub record_count: i32,
    pub created_at: NaiveDateTime,
}

impl NewLlmCall {
    pub fn new(
        status: LlmCallStatus,
        model: String,
        system_prompt: String,
        user_prompt: String,
        request: String,
        request_url: String,
        response: String,
        output: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            status: status.as_str().to_string(),
            model,
            system_prompt,
            user_prompt,
            request,
            request_url,
            response,
            output,
            table_name: None,
            record_count: 0,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Call that went over the wire; `output` is the assistant text or the failure message.
    pub fn from_completion(
        status: LlmCallStatus,
        completion: &CompletionOutput,
        system_prompt: &str,
        user_prompt: &str,
        output: String,
    ) -> Self {
        Self::new(
            status,
            completion.model.clone(),
            system_prompt.to_string(),
            user_prompt.to_string(),
            completion.request.clone(),
            completion.request_url.clone(),
            completion.response.clone(),
            output,
        )
    }
}
