pub mod chat;
pub mod convert;

pub use chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
pub use convert::{ConvertRequest, ConvertResponse, ErrorBody};
