mod config;
mod http;
mod mock;
mod traits;

pub use config::{EndpointConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use http::ChatCompletionClient;
pub use mock::MockConverter;
pub use traits::{
    has_usable_text, ConvertError, Converter, EMPTY_INPUT_MESSAGE, FAILURE_MESSAGE,
};
