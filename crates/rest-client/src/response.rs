//! HTTP response types

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;

/// Buffered HTTP response with status code and body access
///
/// The transport reads the full body before handing the response back, so
/// accessors here never touch the network. A non-2xx status is carried as a
/// normal response, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    /// Create a response from a status code and a buffered body
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Get the response body as text
    pub fn text(&self) -> Response<String> {
        String::from_utf8(self.body.clone())
            .map_err(|e| HttpError::Serialization(e.to_string()))
    }

    /// Get the response body as bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Deserialize the response body as JSON into T
    pub fn json<T: DeserializeOwned>(&self) -> Response<T> {
        serde_json::from_slice(&self.body).map_err(HttpError::from)
    }

    /// Decode the response body into a generic JSON value
    ///
    /// Returns [`Value::Null`] when the body is not valid JSON instead of
    /// erroring, so callers can probe bodies of unknown shape.
    pub fn json_body(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}
