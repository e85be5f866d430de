use http::header;
use http::{HeaderMap, HeaderValue, StatusCode};

use crate::errors::RedirectError;

/// Structured rejection handed to the external responder, which serializes
/// it into a protocol-correct response and terminates the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: StatusCode,
    pub reason: &'static str,
    pub headers: HeaderMap,
}

impl From<&RedirectError> for Rejection {
    fn from(error: &RedirectError) -> Self {
        let (status, reason) = match error {
            RedirectError::NoHost => (StatusCode::NOT_FOUND, "Blocked"),
            RedirectError::HostNotAllowed { .. } => (StatusCode::IM_A_TEAPOT, "I'm a tea pot"),
        };
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
        Self {
            status,
            reason,
            headers,
        }
    }
}

impl From<RedirectError> for Rejection {
    fn from(error: RedirectError) -> Self {
        Self::from(&error)
    }
}
