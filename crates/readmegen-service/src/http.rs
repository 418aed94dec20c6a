use async_trait::async_trait;
use readmegen_core::{ChatCompletionRequest, ChatCompletionResponse};
use reqwest::Client;
use tracing::debug;

use crate::{ConvertError, Converter, EndpointConfig};

/// Async HTTP client implementation of Converter.
/// Sends one chat-completion request per conversion, never retries.
pub struct ChatCompletionClient {
    config: EndpointConfig,
    client: Client,
}

impl ChatCompletionClient {
    pub fn new(config: EndpointConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: EndpointConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// The request body sent for `text`: the fixed instruction as the system
    /// message, `text` verbatim as the user message.
    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest::with_instruction(
            &self.config.model,
            readmegen_prompts::instruction_text(),
            text,
        )
    }
}

#[async_trait]
impl Converter for ChatCompletionClient {
    async fn convert(&self, text: &str) -> Result<String, ConvertError> {
        if !crate::has_usable_text(text) {
            return Err(ConvertError::EmptyInput);
        }

        let body = self.build_request(text);
        debug!(
            url = %self.config.url,
            model = %self.config.model,
            input_len = text.len(),
            "sending chat completion request"
        );

        let resp = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConvertError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ConvertError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded = resp
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| ConvertError::Decode(e.to_string()))?;

        decoded
            .into_first_content()
            .ok_or(ConvertError::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use readmegen_core::Role;
    use readmegen_server::test_helpers::{spawn_fake_completion, spawn_fake_upstream, unreachable_url};

    fn client_for(url: &str) -> ChatCompletionClient {
        ChatCompletionClient::new(
            EndpointConfig::new("test-key")
                .with_url(url)
                .with_model("test-model"),
        )
    }

    #[test]
    fn build_request_pairs_instruction_and_text() {
        let client = client_for("http://unused");
        let req = client.build_request("  my project\n");
        assert_eq!(req.model, "test-model");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[0].content, readmegen_prompts::instruction_text());
        assert_eq!(req.messages[1].role, Role::User);
        assert_eq!(req.messages[1].content, "  my project\n");
    }

    #[tokio::test]
    async fn sends_one_request_with_verbatim_user_text() {
        let upstream = spawn_fake_completion("# Generated\n").await;
        let client = client_for(&upstream.url);

        let input = "A CLI that syncs dotfiles.\n\nUses Rust and git.";
        let out = client.convert(input).await.unwrap();
        assert_eq!(out, "# Generated\n");

        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.authorization.as_deref(), Some("Bearer test-key"));
        assert_eq!(req.content_type.as_deref(), Some("application/json"));
        assert_eq!(req.body["model"], "test-model");
        assert_eq!(req.body["messages"][0]["role"], "system");
        assert_eq!(
            req.body["messages"][0]["content"],
            readmegen_prompts::instruction_text()
        );
        assert_eq!(req.body["messages"][1]["role"], "user");
        assert_eq!(req.body["messages"][1]["content"], input);
    }

    #[tokio::test]
    async fn content_is_returned_untouched() {
        let content = "\n  # Title  \n\n```env\nKEY=value\n```\n\n";
        let upstream = spawn_fake_completion(content).await;
        let out = client_for(&upstream.url).convert("text").await.unwrap();
        assert_eq!(out, content);
    }

    #[tokio::test]
    async fn empty_input_makes_no_request() {
        let upstream = spawn_fake_completion("unused").await;
        let client = client_for(&upstream.url);

        for input in ["", "   ", "\n\t  \n"] {
            let err = client.convert(input).await.unwrap_err();
            assert_eq!(err, ConvertError::EmptyInput);
        }
        assert_eq!(upstream.hits(), 0);
    }

    #[tokio::test]
    async fn non_success_status_fails() {
        let upstream = spawn_fake_upstream(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"invalid api key"}"#,
        )
        .await;
        let err = client_for(&upstream.url).convert("text").await.unwrap_err();
        match err {
            ConvertError::Status { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid api key"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(upstream.hits(), 1);
    }

    #[tokio::test]
    async fn missing_choices_fails_to_decode() {
        let upstream = spawn_fake_upstream(StatusCode::OK, r#"{"id":"cmpl-1"}"#).await;
        let err = client_for(&upstream.url).convert("text").await.unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)), "got {err:?}");
        assert!(!err.is_empty_input());
    }

    #[tokio::test]
    async fn malformed_body_fails_to_decode() {
        let upstream = spawn_fake_upstream(StatusCode::OK, "not json").await;
        let err = client_for(&upstream.url).convert("text").await.unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn empty_choices_is_missing_content() {
        let upstream = spawn_fake_upstream(StatusCode::OK, r#"{"choices":[]}"#).await;
        let err = client_for(&upstream.url).convert("text").await.unwrap_err();
        assert_eq!(err, ConvertError::MissingContent);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let url = unreachable_url().await;
        let err = client_for(&url).convert("text").await.unwrap_err();
        assert!(matches!(err, ConvertError::Transport(_)), "got {err:?}");
    }
}
