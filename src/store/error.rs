//! The error value kept in the store when an action fails.

use std::fmt::Display;

use serde_json::Value;

use crate::api::ApiError;

/// The fallback message for failed reads and preference updates.
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// The fallback message for a failed subscription.
pub const SUBSCRIBE_ERROR: &str = "Could not subscribe to the fund";
/// The fallback message for a failed cancellation.
pub const CANCEL_ERROR: &str = "Could not cancel the subscription";

/// A normalized error from the funds API.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// A message that can be shown as is.
    Message(String),
    /// A structured error body that did not carry a `detail` message.
    Body(Value),
}

impl ErrorPayload {
    /// Normalize `error` into the value shown to the user.
    ///
    /// The server's `detail` message wins, then any other body the server
    /// sent, then the transport or parse error message. `fallback` is used
    /// when the server answered with an error status and no body.
    pub fn from_api_error(error: &ApiError, fallback: &str) -> Self {
        if let Some(detail) = error.detail() {
            return ErrorPayload::Message(detail.to_owned());
        }

        match error {
            ApiError::Status {
                body: Some(Value::String(message)),
                ..
            } => ErrorPayload::Message(message.to_owned()),
            ApiError::Status {
                body: Some(body), ..
            } => ErrorPayload::Body(body.clone()),
            ApiError::Status { body: None, .. } => ErrorPayload::Message(fallback.to_owned()),
            ApiError::Http(error) => ErrorPayload::Message(error.to_string()),
            ApiError::Parse(message) => ErrorPayload::Message(message.to_owned()),
            ApiError::InvalidBaseUrl(_) => ErrorPayload::Message(error.to_string()),
        }
    }
}

impl Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPayload::Message(message) => write!(f, "{message}"),
            ErrorPayload::Body(body) => write!(f, "{body}"),
        }
    }
}

impl From<&str> for ErrorPayload {
    fn from(message: &str) -> Self {
        ErrorPayload::Message(message.to_owned())
    }
}
