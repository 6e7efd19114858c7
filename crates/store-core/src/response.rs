//! # Response Envelope
//!
//! Pairs an HTTP status code with an optional typed body.

use serde::Serialize;

/// Status + optional body returned by every delegate operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Payload, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

impl<T> StoreResponse<T> {
    /// 200 with a body
    pub fn ok(body: T) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    /// 200 without a body
    pub fn empty() -> Self {
        Self {
            status: 200,
            body: None,
        }
    }

    /// 204 without a body
    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// Arbitrary status with an optional body
    pub fn with_status(status: u16, body: Option<T>) -> Self {
        Self { status, body }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl<T> Default for StoreResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = StoreResponse::ok(5);
        assert_eq!(ok.status, 200);
        assert_eq!(ok.body, Some(5));

        let empty: StoreResponse<i32> = StoreResponse::default();
        assert_eq!(empty.status, 200);
        assert!(empty.body.is_none());
        assert!(empty.is_success());

        let gone: StoreResponse<()> = StoreResponse::with_status(404, None);
        assert!(!gone.is_success());
        assert!(StoreResponse::<()>::no_content().is_success());
    }
}
