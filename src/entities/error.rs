use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

#[derive(Serialize, Deserialize)]
pub struct DataCreatorError {
    pub status_code: u32,
    #[serde(skip)]
    pub error_type: ErrorType,
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorType {
    #[default]
    InternalError,
    DatabaseError,
    ApiError,
    LlmError,
    ValidationError,
}

impl DataCreatorError {
    pub fn new(status_code: u32, error_type: ErrorType, message: String) -> DataCreatorError {
        tracing::debug!("status code: {status_code}; message : {message}");
        DataCreatorError { status_code, error_type, message }
    }

    pub fn not_found(message: String) -> DataCreatorError {
        DataCreatorError::new(404, ErrorType::ApiError, message)
    }

    pub fn status(&self) -> StatusCode {
        u16::try_from(self.status_code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for DataCreatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl fmt::Debug for DataCreatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({}): {}", self.error_type, self.status_code, self.message)
    }
}

impl std::error::Error for DataCreatorError {}

impl IntoResponse for DataCreatorError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<DieselError> for DataCreatorError {
    fn from(error: DieselError) -> DataCreatorError {
        match error {
            DieselError::DatabaseError(_, err) => DataCreatorError::new(409, ErrorType::DatabaseError, err.message().to_string()),
            DieselError::NotFound => DataCreatorError::new(404, ErrorType::ApiError, "Record not found".to_string()),
            err => DataCreatorError::new(500, ErrorType::DatabaseError, format!("Diesel error: {}", err)),
        }
    }
}

impl From<PoolError> for DataCreatorError {
    fn from(error: PoolError) -> DataCreatorError {
        DataCreatorError::new(500, ErrorType::DatabaseError, format!("Could not get a connection from the pool: {}", error))
    }
}

impl From<SerdeError> for DataCreatorError {
    fn from(error: SerdeError) -> DataCreatorError {
        DataCreatorError::new(400, ErrorType::ApiError, format!("serde error : {}", error))
    }
}

impl From<reqwest::Error> for DataCreatorError {
    fn from(error: reqwest::Error) -> DataCreatorError {
        DataCreatorError::new(502, ErrorType::LlmError, format!("External API call failed: {}", error))
    }
}

impl From<minijinja::Error> for DataCreatorError {
    fn from(error: minijinja::Error) -> DataCreatorError {
        DataCreatorError::new(500, ErrorType::InternalError, format!("Template error: {}", error))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for DataCreatorError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> DataCreatorError {
        DataCreatorError::new(500, ErrorType::InternalError, error.to_string())
    }
}
