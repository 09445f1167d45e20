use axum::{routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new().route("/translate", post(handlers::translate))
}

/// Full application with middleware, ready to serve
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm::{LlmError, StatelessLLMInterface};
    use crate::translate::error::{INTERNAL_ERROR_MESSAGE, MISSING_FIELDS_MESSAGE};

    const HELLO_FRENCH: &str = r#"{"text": "Hello", "targetLanguage": "French"}"#;

    /// Model stub returning a canned reply and counting calls
    struct StubLLM {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubLLM {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatelessLLMInterface for StubLLM {
        async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(status) => Err(LlmError::Status {
                    status: *status,
                    body: "secret upstream detail".to_string(),
                }),
            }
        }
    }

    async fn post_translate(llm: Arc<StubLLM>, body: &str) -> (StatusCode, Value) {
        let state = AppState::with_llm(Config::default(), llm).unwrap();
        let response = create_app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/translate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn translates_hello_into_french() {
        let llm = StubLLM::replying(
            r#"{"translatedText": "Bonjour, comment ça va?", "language": "French"}"#,
        );
        let (status, body) = post_translate(
            llm.clone(),
            r#"{"text": "Hello, how are you?", "targetLanguage": "French"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"result": {"translatedText": "Bonjour, comment ça va?", "language": "French"}})
        );
        assert_eq!(llm.calls(), 1);

        let prompt = llm.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("into French"));
        assert!(prompt.contains("Text: Hello, how are you?"));
    }

    #[tokio::test]
    async fn fenced_reply_is_accepted() {
        let llm = StubLLM::replying(
            "```json\n{\"translatedText\": \"Hallo\", \"language\": \"German\"}\n```",
        );
        let (status, body) =
            post_translate(llm, r#"{"text": "Hello", "targetLanguage": "German"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["translatedText"], "Hallo");
        assert_eq!(body["result"]["language"], "German");
    }

    #[tokio::test]
    async fn missing_target_language_never_reaches_the_model() {
        let llm = StubLLM::replying("{}");
        let (status, body) = post_translate(llm.clone(), r#"{"text": "hi"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": MISSING_FIELDS_MESSAGE}));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn empty_fields_never_reach_the_model() {
        let llm = StubLLM::replying("{}");
        for request in [
            r#"{"text": "", "targetLanguage": "French"}"#,
            r#"{"text": "hi", "targetLanguage": ""}"#,
            r#"{}"#,
            "not json at all",
        ] {
            let (status, body) = post_translate(llm.clone(), request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "request {request}");
            assert_eq!(body["error"], MISSING_FIELDS_MESSAGE);
        }
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn model_reported_error_is_echoed() {
        let llm = StubLLM::replying(
            r#"{"error": "Unsupported language: Elvish", "language": "Elvish"}"#,
        );
        let (status, body) =
            post_translate(llm, r#"{"text": "hi", "targetLanguage": "Elvish"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Unsupported language: Elvish"}));
    }

    #[tokio::test]
    async fn empty_error_value_is_not_a_refusal() {
        let llm = StubLLM::replying(
            r#"{"error": "", "translatedText": "Bonjour", "language": "French"}"#,
        );
        let (status, body) = post_translate(llm, HELLO_FRENCH).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"result": {"translatedText": "Bonjour", "language": "French"}})
        );
    }

    #[tokio::test]
    async fn reply_with_only_a_closing_fence_is_accepted() {
        let llm = StubLLM::replying(
            "{\"translatedText\": \"Bonjour\", \"language\": \"French\"}\n```",
        );
        let (status, body) = post_translate(llm, HELLO_FRENCH).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["translatedText"], "Bonjour");
    }

    #[tokio::test]
    async fn invalid_model_json_is_an_internal_error() {
        let llm = StubLLM::replying("Bonjour!");
        let (status, body) = post_translate(llm, HELLO_FRENCH).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": INTERNAL_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn schema_mismatch_is_an_internal_error() {
        let llm = StubLLM::replying(r#"{"translation": "Bonjour"}"#);
        let (status, body) = post_translate(llm, HELLO_FRENCH).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": INTERNAL_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn transport_failure_does_not_leak_details() {
        let llm = StubLLM::failing(429);
        let (status, body) = post_translate(llm.clone(), HELLO_FRENCH).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": INTERNAL_ERROR_MESSAGE}));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn only_post_is_routed() {
        let state = AppState::with_llm(Config::default(), StubLLM::replying("{}")).unwrap();
        let response = create_app(state)
            .oneshot(Request::builder().uri("/translate").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
