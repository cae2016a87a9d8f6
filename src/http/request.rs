use crate::error::ClientResult;

use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A fully shaped request, ready for a [`crate::http::Transport`]
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub(crate) method: Method,
    pub(crate) endpoint: String,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Value>,
    pub(crate) timeout: Duration,
    pub(crate) request_id: Uuid,
}

impl PreparedRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The endpoint as given by the caller, before joining.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The client's timeout. Recorded, not enforced.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Convert into a [`reqwest::Request`] for callers that own a real
    /// transport. The JSON body is serialized and the timeout carried over.
    pub fn into_reqwest(self) -> ClientResult<reqwest::Request> {
        let mut request = reqwest::Request::new(self.method, self.url);
        *request.headers_mut() = self.headers;
        *request.timeout_mut() = Some(self.timeout);
        if let Some(body) = self.body {
            let bytes = serde_json::to_vec(&body)?;
            *request.body_mut() = Some(bytes.into());
        }
        Ok(request)
    }
}
