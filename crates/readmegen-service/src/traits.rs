use async_trait::async_trait;
use thiserror::Error;

/// Shown to the user when the input has no usable text.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to convert";

/// Shown to the user for every other failure. The cause is only logged.
pub const FAILURE_MESSAGE: &str = "Failed to convert text. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("json decode: {0}")]
    Decode(String),

    #[error("response has no choices[0].message.content")]
    MissingContent,
}

impl ConvertError {
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ConvertError::EmptyInput)
    }

    /// The message a user sees. Every error besides empty input collapses
    /// into the same text.
    pub fn user_message(&self) -> &'static str {
        if self.is_empty_input() {
            EMPTY_INPUT_MESSAGE
        } else {
            FAILURE_MESSAGE
        }
    }
}

/// Whether `text` has anything besides whitespace.
pub fn has_usable_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Turns free text into README markdown.
///
/// The server programs against this trait.
/// `ChatCompletionClient` calls a remote chat-completion endpoint.
/// `MockConverter` returns a canned result for tests.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Convert `text` into markdown.
    ///
    /// Whitespace-only input fails with `ConvertError::EmptyInput`
    /// before any request is made.
    async fn convert(&self, text: &str) -> Result<String, ConvertError>;
}
