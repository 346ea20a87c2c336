extern crate dotenv;

use dotenv::dotenv;

use crate::entities::error::{DataCreatorError, ErrorType};

pub fn get_database_url() -> String {
    dotenv().ok();
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "testdata.db".to_string())
}

pub fn get_openai_api_key() -> Result<String, DataCreatorError> {
    dotenv().ok();
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(DataCreatorError::new(
            500,
            ErrorType::LlmError,
            "OPENAI_API_KEY should be set to call the completion API".to_string(),
        )),
    }
}

pub fn get_openai_api_base_url() -> String {
    dotenv().ok();
    std::env::var("OPENAI_API_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| "https://api.openai.com".to_string())
}

pub fn get_openai_model() -> String {
    dotenv().ok();
    std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-nano".to_string())
}

pub fn get_bind_address() -> String {
    dotenv().ok();
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}
