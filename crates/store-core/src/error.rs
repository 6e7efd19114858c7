//! # Store Error Types
//!
//! Typed error handling for the Store API.
//! Delegates and the HTTP layer both speak `Result<T, StoreError>`.

use thiserror::Error;

/// Core error type for all store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Order ID could not be parsed or is blank
    #[error("Invalid ID supplied: {0}")]
    InvalidOrderId(String),

    /// Order ID parsed but falls outside the declared bound
    #[error("Invalid ID supplied: {order_id} is outside {min}..={max}")]
    OrderIdOutOfRange { order_id: i64, min: i64, max: i64 },

    /// Order body missing or malformed
    #[error("Invalid Order: {0}")]
    InvalidOrder(String),

    /// Request body was not sent as a supported media type
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Accept header allows none of the operation's media types
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    /// Order does not exist
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: String },

    /// Configuration errors (bad bind address, unreadable config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error raised by a delegate
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::InvalidOrderId(_) => 400,
            StoreError::OrderIdOutOfRange { .. } => 400,
            StoreError::InvalidOrder(_) => 400,
            StoreError::UnsupportedMediaType(_) => 415,
            StoreError::NotAcceptable(_) => 406,
            StoreError::OrderNotFound { .. } => 404,
            StoreError::Configuration(_) => 500,
            StoreError::Internal(_) => 500,
        }
    }

    /// Returns true for errors caused by the client request
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
