use serde::Serialize;

use crate::entities::order_record::OrderRecord;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AppState {
    pub messages: Vec<String>,
    pub generated_data: Vec<OrderRecord>,
}

impl AppState {
    pub fn from_request(request: &str) -> AppState {
        AppState {
            messages: vec![request.to_string()],
            generated_data: Vec::new(),
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One-line status shown above the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Notice {
        Notice { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Notice {
        Notice { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Notice {
        Notice { level: NoticeLevel::Error, message: message.into() }
    }
}
