use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a successful invocation.
pub const OK: i32 = 200;

/// Statuses at or above this value are errors.
pub const ERROR_THRESHOLD: i32 = 400;

/// Status of a failed invocation built with [`Response::error`].
pub const ERROR: i32 = 500;

/// Result of one chaincode invocation, handed back to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP-style status code.
    pub status: i32,
    /// Human-readable message, empty on success.
    pub message: String,
    /// Opaque payload returned to the submitter.
    pub payload: Vec<u8>,
}

impl Response {
    /// A successful response carrying `payload`.
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// A successful response with no payload.
    pub fn empty_success() -> Self {
        Self::success(Vec::<u8>::new())
    }

    /// A generic error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_status(ERROR, message)
    }

    /// A response with an explicit status code and no payload.
    pub fn with_status(status: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns `true` if the status is below [`ERROR_THRESHOLD`].
    pub fn is_ok(&self) -> bool {
        self.status < ERROR_THRESHOLD
    }

    /// The payload decoded as UTF-8, replacing invalid sequences.
    pub fn payload_str(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "status:{} payload:{:?}", self.status, self.payload_str())
        } else {
            write!(f, "status:{} message:{:?}", self.status, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_ok_status() {
        let r = Response::success("42");
        assert_eq!(r.status, OK);
        assert!(r.is_ok());
        assert_eq!(r.payload, b"42");
        assert!(r.message.is_empty());
    }

    #[test]
    fn error_has_500_status() {
        let r = Response::error("boom");
        assert_eq!(r.status, ERROR);
        assert!(!r.is_ok());
        assert_eq!(r.message, "boom");
        assert!(r.payload.is_empty());
    }

    #[test]
    fn raw_status_is_kept() {
        let r = Response::with_status(404, "Not Found");
        assert_eq!(r.status, 404);
        assert!(!r.is_ok());
    }

    #[test]
    fn display_shows_payload_or_message() {
        assert_eq!(
            Response::success("x").to_string(),
            "status:200 payload:\"x\""
        );
        assert_eq!(
            Response::with_status(404, "Not Found").to_string(),
            "status:404 message:\"Not Found\""
        );
    }

    #[test]
    fn serde_roundtrip() {
        let r = Response::success(b"payload".to_vec());
        let json = serde_json::to_string(&r).unwrap();
        let parsed: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }
}
