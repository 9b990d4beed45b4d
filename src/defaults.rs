//! Default Configuration Values
//!
//! Centralizes the default values used throughout the client so they are easy
//! to document and adjust in one place.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default total timeout for HTTP requests
    ///
    /// The gateway can be slow when fanning a message out to large channels,
    /// so the ceiling is generous.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(300);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("tgservice/", env!("CARGO_PKG_VERSION"));
}

/// Service endpoint defaults
pub mod endpoint {
    /// Production base URL of the TgService REST API
    pub const BASE_URL: &str = "https://tg.bizandsoft.ru/api";
}
