//! HTTP dispatcher for the Freshdesk API.
//!
//! This module provides the `FreshdeskClient` struct, which turns logical
//! requests (method, endpoint, payload, query) into authenticated HTTP
//! calls and maps failures onto [`FreshdeskError`].
//!
//! Resource accessors such as [`FreshdeskClient::tickets`] borrow the
//! client and only build paths; all I/O goes through
//! [`FreshdeskClient::request`].
//!
//! # Security
//!
//! The API key is never logged.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::FreshdeskError;
use crate::models::{query_pairs, Payload, Query, RequestBody};
use crate::resources::{
    Agents, BusinessHours, Categories, Comments, Companies, Contacts, Conversations,
    EmailConfigs, Forums, Groups, Products, SlaPolicies, Tickets, TimeEntries, Topics,
};

/// Password sent with the API key; Freshdesk ignores its value.
const API_KEY_PASSWORD: &str = "X";

/// HTTP client for the Freshdesk API.
///
/// Cloning is cheap and clones share the connection pool. The client holds
/// no per-call state and may be used from many tasks at once.
///
/// # Example
///
/// ```ignore
/// let config = Config::new(api_key, "acme")?;
/// let client = FreshdeskClient::new(&config)?;
///
/// let ticket = client.tickets().view(42, None).await?;
/// ```
#[derive(Clone)]
pub struct FreshdeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL every endpoint is appended to.
    base_url: String,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,
}

impl FreshdeskClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshdeskError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("freshdesk-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FreshdeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the API key for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub fn api_key_for_sanitization(&self) -> &str {
        &self.api_key
    }

    /// Sends a request and decodes the JSON response.
    ///
    /// The URL is the base URL followed by `endpoint`. A payload with a
    /// non-empty `attachments` entry is sent as a multipart form, any other
    /// payload as JSON. `query` is appended to the URL.
    ///
    /// An empty response body decodes to `Value::Null`.
    ///
    /// # Errors
    ///
    /// - `FreshdeskError::InvalidAttachment` if attachments cannot be encoded
    /// - `FreshdeskError::Http` if no response was received
    /// - a status-specific variant for non-success responses
    /// - `FreshdeskError::Serialization` if the response is not JSON
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        data: Option<&Payload>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        let body = RequestBody::encode(data)?;
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(
            method = %method,
            endpoint = %endpoint,
            multipart = body.is_multipart(),
            "Making Freshdesk API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.api_key, Some(API_KEY_PASSWORD));

        if let Some(query) = query {
            req = req.query(&query_pairs(query));
        }

        let req = body.apply(req)?;

        let response = req.send().await.map_err(FreshdeskError::Http)?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        let bytes = response.bytes().await.map_err(FreshdeskError::Http)?;

        tracing::trace!(
            method = %method,
            endpoint = %endpoint,
            status = %status,
            body = %String::from_utf8_lossy(&bytes),
            "Freshdesk API response"
        );

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Makes a GET request.
    pub async fn get(&self, endpoint: &str, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.request(Method::GET, endpoint, None, query).await
    }

    /// Makes a POST request.
    pub async fn post(&self, endpoint: &str, data: &Payload) -> Result<Value, FreshdeskError> {
        self.request(Method::POST, endpoint, Some(data), None).await
    }

    /// Makes a PUT request.
    pub async fn put(&self, endpoint: &str, data: Option<&Payload>) -> Result<Value, FreshdeskError> {
        self.request(Method::PUT, endpoint, data, None).await
    }

    /// Makes a DELETE request.
    pub async fn delete(
        &self,
        endpoint: &str,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        self.request(Method::DELETE, endpoint, None, query).await
    }

    /// Converts a non-success response into a `FreshdeskError`.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> FreshdeskError {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(retry_after = ?retry_after, "Rate limited by Freshdesk");
        } else {
            tracing::debug!(status = %status, "Freshdesk API returned an error status");
        }

        FreshdeskError::from_status(status, body, retry_after)
    }

    // ========================================================================
    // Resource accessors
    // ========================================================================

    /// Agent resources.
    pub fn agents(&self) -> Agents<'_> {
        Agents::new(self)
    }

    /// Company resources.
    pub fn companies(&self) -> Companies<'_> {
        Companies::new(self)
    }

    /// Contact resources.
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    /// Group resources.
    pub fn groups(&self) -> Groups<'_> {
        Groups::new(self)
    }

    /// Ticket resources.
    pub fn tickets(&self) -> Tickets<'_> {
        Tickets::new(self)
    }

    /// Time entry resources.
    pub fn time_entries(&self) -> TimeEntries<'_> {
        TimeEntries::new(self)
    }

    /// Conversation resources.
    pub fn conversations(&self) -> Conversations<'_> {
        Conversations::new(self)
    }

    /// Discussion category resources.
    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    /// Discussion forum resources.
    pub fn forums(&self) -> Forums<'_> {
        Forums::new(self)
    }

    /// Discussion topic resources.
    pub fn topics(&self) -> Topics<'_> {
        Topics::new(self)
    }

    /// Discussion comment resources.
    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    /// Product resources.
    pub fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Email config resources.
    pub fn email_configs(&self) -> EmailConfigs<'_> {
        EmailConfigs::new(self)
    }

    /// SLA policy resources.
    pub fn sla_policies(&self) -> SlaPolicies<'_> {
        SlaPolicies::new(self)
    }

    /// Business hours resources.
    pub fn business_hours(&self) -> BusinessHours<'_> {
        BusinessHours::new(self)
    }
}

impl std::fmt::Debug for FreshdeskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreshdeskClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_uses_config_base_url() {
        let config = Config::new("abc123", "acme").unwrap();
        let client = FreshdeskClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://acme.freshdesk.com/api/v2");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = Config::new("very_secret_key", "acme").unwrap();
        let client = FreshdeskClient::new(&config).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very_secret_key"));
        assert!(debug.contains("acme.freshdesk.com"));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<FreshdeskClient>();
    }
}
