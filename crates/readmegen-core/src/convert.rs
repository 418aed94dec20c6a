use serde::{Deserialize, Serialize};

/// Body of `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
}

/// Successful reply from `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub id: String,
    pub markdown: String,
}

/// Error reply body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
