//! TgService client implementation.
//!
//! [`TgServiceClient`] owns the credentials and base endpoint and performs the
//! actual HTTP exchanges. The resource-level operations built on top of it
//! live in [`crate::api`].

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};

use crate::defaults;
use crate::error::{ApiError, ApiFailure, Result};
use crate::types::{HttpConfig, Params};

/// Client for the TgService REST API.
///
/// All fields are read-only after construction, so the client is safe to
/// clone and share across tasks; each call performs exactly one HTTP
/// exchange.
#[derive(Clone)]
pub struct TgServiceClient {
    login: String,
    password: SecretString,
    base_url: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for TgServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TgServiceClient")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`TgServiceClient`]
pub struct TgServiceClientBuilder {
    login: Option<String>,
    password: Option<String>,
    base_url: String,
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
}

impl TgServiceClientBuilder {
    fn new() -> Self {
        Self {
            login: None,
            password: None,
            base_url: defaults::endpoint::BASE_URL.to_string(),
            http_config: HttpConfig::default(),
            http_client: None,
        }
    }

    /// Sets the account login
    pub fn login<S: Into<String>>(mut self, login: S) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Sets the account password
    pub fn password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Overrides the base endpoint (mainly for tests against a local server)
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the total request timeout
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.http_config.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout
    pub fn connect_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.http_config.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.http_config.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a default header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.http_config.headers.insert(name.into(), value.into());
        self
    }

    /// Disables TLS certificate and hostname verification.
    ///
    /// Verification is on by default; leave it on unless the gateway's
    /// certificate chain genuinely cannot be validated in your environment.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.http_config.danger_accept_invalid_certs = accept;
        self
    }

    /// Replaces the whole HTTP configuration
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Uses a pre-built `reqwest::Client` instead of building one from
    /// [`HttpConfig`].
    ///
    /// The injected client is used as-is; timeout and TLS settings from the
    /// builder no longer apply.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validates the credentials and builds the client.
    pub fn build(self) -> Result<TgServiceClient> {
        let login = self.login.unwrap_or_default();
        let password = self.password.unwrap_or_default();
        if login.is_empty() || password.is_empty() {
            return Err(ApiError::InvalidInput("empty login or password".to_string()));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => build_http_client(&self.http_config)?,
        };

        Ok(TgServiceClient {
            login,
            password: password.into(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }
}

/// Build a `reqwest::Client` from [`HttpConfig`].
///
/// Single construction chokepoint so every client carries the same headers
/// and transport policy.
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ApiError::Configuration(format!("invalid header name '{name}': {e}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            ApiError::Configuration(format!("invalid header value for '{name}': {e}"))
        })?;
        headers.insert(name, value);
    }

    let mut builder = reqwest::Client::builder().default_headers(headers);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }
    if config.danger_accept_invalid_certs {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|e| ApiError::Configuration(format!("failed to create HTTP client: {e}")))
}

impl TgServiceClient {
    /// Creates a client with default configuration.
    ///
    /// Equivalent to `TgServiceClient::builder().login(..).password(..).build()`.
    pub fn new<L: Into<String>, P: Into<String>>(login: L, password: P) -> Result<Self> {
        Self::builder().login(login).password(password).build()
    }

    /// Returns a builder for customized construction.
    pub fn builder() -> TgServiceClientBuilder {
        TgServiceClientBuilder::new()
    }

    /// Base endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Form and send one request to the API service.
    ///
    /// GET serializes non-empty `params` as the query string; POST, PATCH and
    /// DELETE serialize them as the JSON body, each with its own verb on the
    /// wire. Basic credentials are attached to every request.
    ///
    /// Returns `Ok(Some(value))` for a JSON body, `Ok(None)` when the service
    /// answered successfully with an empty (or non-JSON) body, and
    /// [`ApiError::Api`] for any status of 400 or above or a transport
    /// failure. Exactly one network exchange happens per call.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<Option<Value>> {
        let url = format!("{}/{}", self.base_url, path);

        let mut rb = self
            .http_client
            .request(method.clone(), &url)
            .basic_auth(&self.login, Some(self.password.expose_secret()));
        if method == Method::GET {
            if !params.is_empty() {
                rb = rb.query(&query_pairs(params));
            }
        } else {
            rb = rb.json(params);
        }

        let req = rb
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build request: {e}")))?;
        let url = req.url().to_string();
        debug!(method = %method, url = %url, "dispatching TgService request");

        let response = match self.http_client.execute(req).await {
            Ok(response) => response,
            Err(e) => {
                warn!(method = %method, url = %url, error = %e, "transport failure");
                return Err(ApiError::Api(Box::new(ApiFailure {
                    status: None,
                    method,
                    url,
                    body: None,
                    headers: HeaderMap::new(),
                    transport: Some(e.to_string()),
                })));
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(method = %method, url = %url, error = %e, "failed to read response body");
                return Err(ApiError::Api(Box::new(ApiFailure {
                    status: Some(status.as_u16()),
                    method,
                    url,
                    body: None,
                    headers,
                    transport: Some(e.to_string()),
                })));
            }
        };

        // An unparseable body is treated as absent, not as an error.
        let body = serde_json::from_str::<Value>(&text).ok();

        if status.as_u16() >= 400 {
            warn!(method = %method, url = %url, status = status.as_u16(), "TgService request failed");
            return Err(ApiError::Api(Box::new(ApiFailure {
                status: Some(status.as_u16()),
                method,
                url,
                body,
                headers,
                transport: None,
            })));
        }

        Ok(body)
    }

    /// Send a GET request
    pub async fn get(&self, path: &str, params: &Params) -> Result<Option<Value>> {
        self.request(Method::GET, path, params).await
    }

    /// Send a POST request
    pub async fn post(&self, path: &str, params: &Params) -> Result<Option<Value>> {
        self.request(Method::POST, path, params).await
    }

    /// Send a PATCH request
    pub async fn patch(&self, path: &str, params: &Params) -> Result<Option<Value>> {
        self.request(Method::PATCH, path, params).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, path: &str, params: &Params) -> Result<Option<Value>> {
        self.request(Method::DELETE, path, params).await
    }
}

/// Flatten params into query pairs; scalars keep their literal form, anything
/// else is carried as its JSON text.
fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
