use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use crate::llm::LlmError;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Please provide both 'text' and 'targetLanguage' in the request body";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("missing 'text' or 'targetLanguage'")]
    Validation,

    #[error("model refused to translate: {0}")]
    ModelReported(Value),

    #[error(transparent)]
    Transport(#[from] LlmError),

    #[error("could not decode model reply: {0}")]
    Decode(String),

    #[error("prompt template error: {0}")]
    Template(String),
}

impl TranslateError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation | Self::ModelReported(_) => StatusCode::BAD_REQUEST,
            Self::Transport(_) | Self::Decode(_) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation => json!({ "error": MISSING_FIELDS_MESSAGE }),
            Self::ModelReported(error) => json!({ "error": error }),
            other => {
                // Cause stays in the server log
                error!("Translation failed: {}", other);
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
        };
        (status, Json(body)).into_response()
    }
}
