//! Uniform response envelope.
//!
//! Every entity endpoint answers with `{status, message, data}`, whether it
//! succeeds or fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Envelope wrapping every endpoint payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `success` or `error`
    pub status: ResponseStatus,
    /// Human-readable outcome description
    pub message: String,
    /// Payload, `null` when there is nothing to return
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Successful response carrying no payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<Value> {
    pub fn error(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_lowercase_status() {
        let response = ApiResponse::success(json!({"id": "p1"}), "player created successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "player created successfully");
        assert_eq!(value["data"]["id"], "p1");
    }

    #[test]
    fn test_message_only_has_null_data() {
        let response: ApiResponse<()> = ApiResponse::message_only("Player successfully deleted");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "success");
        assert!(value["data"].is_null());
    }
}
