//! Error types for the TgService client.
//!
//! Three kinds of failure exist, mirroring where they are detected:
//! - [`ApiError::InvalidInput`]: empty credentials or missing required call
//!   parameters, raised before any I/O.
//! - [`ApiError::Configuration`]: the HTTP client itself could not be built.
//! - [`ApiError::Api`]: the exchange happened (or was attempted) and failed;
//!   carries the full [`ApiFailure`] record.

use std::fmt;

use reqwest::Method;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Result type for TgService operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Record of a failed HTTP exchange with the gateway.
///
/// Created once per failure and carried inside [`ApiError::Api`]. A transport
/// breakdown (connect error, timeout) uses the same record with `status` set
/// to `None` and `transport` populated.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    /// HTTP status code; `None` when no response arrived.
    pub status: Option<u16>,
    /// Verb of the attempted request.
    pub method: Method,
    /// Full URL of the attempted request, query string included.
    pub url: String,
    /// Error body returned by the service, when it parsed as JSON.
    pub body: Option<serde_json::Value>,
    /// Raw response headers.
    pub headers: HeaderMap,
    /// Transport-layer error text, when the failure happened below HTTP.
    pub transport: Option<String>,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request {} {} failed", self.method, self.url)?;
        if let Some(status) = self.status {
            write!(f, " with status {status}")?;
        }
        if let Some(transport) = &self.transport {
            write!(f, ": {transport}")?;
        }
        Ok(())
    }
}

/// Errors produced by the TgService client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or empty credentials / required call parameters.
    ///
    /// Detected synchronously, before any network exchange is attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying HTTP client could not be configured or built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The gateway answered with an error status, or the transport failed.
    #[error("{0}")]
    Api(Box<ApiFailure>),
}

impl ApiError {
    /// HTTP status code of a remote failure, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(failure) => failure.status,
            _ => None,
        }
    }

    /// True for remote failures in the 4xx range.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_some_and(|s| (400..500).contains(&s))
    }

    /// True for remote failures in the 5xx range.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|s| s >= 500)
    }

    /// True when the exchange failed below HTTP (connect error, timeout).
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Api(failure) if failure.status.is_none())
    }
}
