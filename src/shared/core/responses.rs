use serde::Serialize;

/// Body shape shared by every error response: `{"message": "..."}`.
#[derive(Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
