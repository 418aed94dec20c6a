use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use readmegen_core::{ConvertRequest, ConvertResponse, ErrorBody};
use readmegen_service::ConvertError;
use serde_json::{json, Value};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/convert", post(convert))
}

async fn convert(
    State(state): State<AppState>,
    Json(input): Json<ConvertRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let id = Uuid::new_v4().to_string();
    let span = info_span!("convert", id = %id);

    async move {
        info!(input_len = input.text.len(), "conversion requested");
        match state.converter.convert(&input.text).await {
            Ok(markdown) => {
                info!(output_len = markdown.len(), "conversion succeeded");
                Ok(Json(json!(ConvertResponse { id, markdown })))
            }
            Err(e) => Err(to_error(e)),
        }
    }
    .instrument(span)
    .await
}

/// Only the user-facing message leaves the server; the cause is logged.
fn to_error(e: ConvertError) -> (StatusCode, Json<Value>) {
    let status = if e.is_empty_input() {
        warn!("rejected empty input");
        StatusCode::BAD_REQUEST
    } else {
        error!("conversion failed: {e}");
        StatusCode::BAD_GATEWAY
    };
    let body = ErrorBody {
        error: e.user_message().to_string(),
    };
    (status, Json(json!(body)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use readmegen_service::{ConvertError, MockConverter, EMPTY_INPUT_MESSAGE, FAILURE_MESSAGE};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_helpers::test_router;

    async fn post_convert(app: Router, body: Value) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/convert")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn convert_success_returns_markdown() {
        let mock = Arc::new(MockConverter::success("# Project\n\nBody"));
        let app = test_router(mock.clone());

        let (status, v) = post_convert(app, json!({ "text": "my project" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["markdown"], "# Project\n\nBody");
        assert_eq!(v["id"].as_str().unwrap().len(), 36);
        assert_eq!(mock.inputs(), vec!["my project".to_string()]);
    }

    #[tokio::test]
    async fn convert_empty_input_is_bad_request() {
        let mock = Arc::new(MockConverter::success("unused"));
        let app = test_router(mock.clone());

        let (status, v) = post_convert(app, json!({ "text": "  \n " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], EMPTY_INPUT_MESSAGE);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn convert_failure_hides_cause() {
        let mock = Arc::new(MockConverter::failure(ConvertError::Status {
            status: 500,
            body: "upstream exploded: secret detail".into(),
        }));
        let app = test_router(mock);

        let (status, v) = post_convert(app, json!({ "text": "my project" })).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(v, json!({ "error": FAILURE_MESSAGE }));
    }

    #[tokio::test]
    async fn convert_every_failure_kind_is_uniform() {
        let failures = [
            ConvertError::Transport("connection refused".into()),
            ConvertError::Decode("missing field `choices`".into()),
            ConvertError::MissingContent,
        ];
        for err in failures {
            let app = test_router(Arc::new(MockConverter::failure(err)));
            let (status, v) = post_convert(app, json!({ "text": "x" })).await;
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(v["error"], FAILURE_MESSAGE);
        }
    }

    #[tokio::test]
    async fn convert_rejects_body_without_text() {
        let mock = Arc::new(MockConverter::success("unused"));
        let app = test_router(mock.clone());
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/convert")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"content":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
        assert_eq!(mock.calls(), 0);
    }
}
