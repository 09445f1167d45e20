use serde::{Deserialize, Serialize};

/// Validated body of a translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

/// Shape the model reply has to satisfy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSchema {
    pub translated_text: String,
    pub language: String,
}

/// Decoded model reply
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationResult {
    Translated(OutputSchema),
    /// The model declined and explained why in an `error` field
    Refused(serde_json::Value),
}
