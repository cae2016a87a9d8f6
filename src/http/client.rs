use crate::config::HttpClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::request::REQUEST_ID_HEADER;
use crate::http::{CannedTransport, PreparedRequest, Response, Transport};
use crate::logging::{log_debug, log_trace};
use crate::retry::{RetryConfig, RetryExecutor};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// HTTP request helper bound to a base URL
///
/// Requests are shaped into [`PreparedRequest`]s and handed to a
/// [`Transport`]. The default transport is [`CannedTransport`], so no
/// request ever leaves the process.
///
/// ```rust
/// use client_wrappers::{HttpClient, HttpClientConfig};
///
/// let client = HttpClient::new(HttpClientConfig::new("https://api.example.com/"))?;
/// assert_eq!(client.build_url("/users"), "https://api.example.com/users");
///
/// let response = client.get("/users")?;
/// assert_eq!(response.status_code, 200);
/// # Ok::<(), client_wrappers::ClientError>(())
/// ```
pub struct HttpClient {
    base_url: String,
    timeout: Duration,
    headers: HeaderMap,
    retry: RetryExecutor,
    transport: Box<dyn Transport>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .field("retry", self.retry.config())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigurationError`] if the base URL, timeout,
    /// retry settings, headers or auth credentials are invalid.
    pub fn new(config: HttpClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let headers = config.header_map()?;
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();

        log_debug!(
            base_url = %base_url,
            timeout_secs = config.timeout.as_secs(),
            header_count = headers.len(),
            max_retries = config.retry.max_retries,
            backoff_factor = config.retry.backoff_factor,
            "HttpClient created"
        );

        Ok(Self {
            base_url,
            timeout: config.timeout,
            headers,
            retry: RetryExecutor::new(config.retry),
            transport: Box::new(CannedTransport),
        })
    }

    /// Replace the transport requests are sent through.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn retry_config(&self) -> &RetryConfig {
        self.retry.config()
    }

    /// Join the base URL and `endpoint` with exactly one slash.
    ///
    /// An endpoint without a leading slash gets one; an empty endpoint
    /// yields the base URL.
    pub fn build_url(&self, endpoint: &str) -> String {
        let path = endpoint.trim().trim_start_matches('/');
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url, path)
    }

    pub fn prepare(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ClientResult<PreparedRequest> {
        self.prepare_with_query(method, endpoint, &[], body)
    }

    /// Shape a request: join the URL, append query pairs, merge default
    /// headers, and tag it with a fresh request id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if the joined URL does not parse.
    pub fn prepare_with_query(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> ClientResult<PreparedRequest> {
        let raw_url = self.build_url(endpoint);
        let mut url = Url::parse(&raw_url).map_err(|e| {
            ClientError::invalid_request(format!("Invalid URL '{raw_url}': {e}"))
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut headers = self.headers.clone();
        if body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let request_id = Uuid::new_v4();
        let id_value = HeaderValue::from_str(&request_id.to_string()).map_err(|e| {
            ClientError::invalid_request(format!("Invalid request id header: {e}"))
        })?;
        headers.insert(REQUEST_ID_HEADER, id_value);

        Ok(PreparedRequest {
            method,
            endpoint: endpoint.to_string(),
            url,
            headers,
            body,
            timeout: self.timeout,
            request_id,
        })
    }

    /// Send a prepared request through the transport under the retry policy.
    pub fn send(&self, request: &PreparedRequest) -> ClientResult<Response> {
        log_debug!(
            method = %request.method(),
            url = %request.url(),
            request_id = %request.request_id(),
            "Sending request"
        );

        self.retry.execute(|attempt| {
            log_trace!(
                attempt = attempt,
                request_id = %request.request_id(),
                "Dispatching to transport"
            );
            self.transport.send(request)
        })
    }

    fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ClientResult<Response> {
        let request = self.prepare(method, endpoint, body)?;
        self.send(&request)
    }

    pub fn get(&self, endpoint: &str) -> ClientResult<Response> {
        self.dispatch(Method::GET, endpoint, None)
    }

    pub fn get_with_query(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<Response> {
        let request = self.prepare_with_query(Method::GET, endpoint, query, None)?;
        self.send(&request)
    }

    pub fn post(&self, endpoint: &str, body: Option<Value>) -> ClientResult<Response> {
        self.dispatch(Method::POST, endpoint, body)
    }

    pub fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> ClientResult<Response> {
        self.post(endpoint, Some(serde_json::to_value(body)?))
    }

    pub fn put(&self, endpoint: &str, body: Option<Value>) -> ClientResult<Response> {
        self.dispatch(Method::PUT, endpoint, body)
    }

    pub fn put_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> ClientResult<Response> {
        self.put(endpoint, Some(serde_json::to_value(body)?))
    }

    pub fn delete(&self, endpoint: &str) -> ClientResult<Response> {
        self.dispatch(Method::DELETE, endpoint, None)
    }
}
