use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Report domain errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Missing required fields")]
    MissingFields,
}

/// JSON error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_renders_client_message() {
        let body = ErrorBody::new(ReportError::MissingFields.to_string());
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"error": "Missing required fields"})
        );
    }
}
