use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::state::AppState;
use crate::translate::{parser, TranslateError, TranslationRequest, TranslationResult};

/// `POST /translate`
pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, TranslateError> {
    // An unreadable body counts as one without fields
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection);
            Value::Null
        }
    };

    let request = validate(&body)?;
    debug!(
        "Translating {} chars into {} with {}",
        request.text.chars().count(),
        request.target_language,
        state.config.llm.model
    );

    match translate_text(&state, &request).await? {
        TranslationResult::Translated(output) => Ok(Json(json!({ "result": output }))),
        TranslationResult::Refused(error) => {
            warn!("Model refused translation into {}: {}", request.target_language, error);
            Err(TranslateError::ModelReported(error))
        }
    }
}

/// Both fields must be non-empty strings.
pub fn validate(body: &Value) -> Result<TranslationRequest, TranslateError> {
    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    match (field("text"), field("targetLanguage")) {
        (Some(text), Some(target_language)) => Ok(TranslationRequest {
            text,
            target_language,
        }),
        _ => Err(TranslateError::Validation),
    }
}

/// Render the prompt, call the model once and decode its reply.
pub async fn translate_text(
    state: &AppState,
    request: &TranslationRequest,
) -> Result<TranslationResult, TranslateError> {
    let prompt = state.prompt.render(&request.text, &request.target_language)?;
    let raw = state.llm.invoke(&prompt).await?;
    parser::parse(&raw)
}
