//! Common types shared across the client.

use std::collections::HashMap;
use std::time::Duration;

/// Request parameters: string keys mapped to JSON-compatible values.
///
/// Serialized as the query string for GET requests and as the JSON body for
/// POST/PATCH/DELETE requests.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// HTTP client configuration
///
/// Applied once when the client is built; see
/// [`crate::client::TgServiceClientBuilder`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// Custom default headers sent with every request
    pub headers: HashMap<String, String>,
    /// User agent
    pub user_agent: Option<String>,
    /// Skip TLS certificate and hostname verification.
    ///
    /// Verification is on by default and only disabled when explicitly asked.
    pub danger_accept_invalid_certs: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(crate::defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(crate::defaults::http::CONNECT_TIMEOUT),
            headers: HashMap::new(),
            user_agent: Some(crate::defaults::http::USER_AGENT.to_string()),
            danger_accept_invalid_certs: false,
        }
    }
}
