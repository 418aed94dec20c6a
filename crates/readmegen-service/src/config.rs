use std::fmt;

pub const DEFAULT_API_URL: &str = "https://glhf.chat/api/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "hf:meta-llama/Llama-3.3-70B-Instruct";

/// Where conversions are sent and how they authenticate.
#[derive(Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Full URL of the chat-completion endpoint.
    pub url: String,
    /// Sent as `Authorization: Bearer <api_key>`.
    pub api_key: String,
    pub model: String,
}

impl EndpointConfig {
    /// Default endpoint and model with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}
