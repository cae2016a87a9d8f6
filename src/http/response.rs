use crate::error::{ClientError, ClientResult};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a request: a status code and a JSON payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status_code: u16,
    pub data: Value,
    /// URL the request was sent to; empty when built by hand
    #[serde(default)]
    pub url: String,
}

impl Response {
    pub fn new(status_code: u16, data: Value) -> Self {
        Self {
            status_code,
            data,
            url: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// The status as a [`StatusCode`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if the code is outside 100..=999.
    pub fn status(&self) -> ClientResult<StatusCode> {
        StatusCode::from_u16(self.status_code).map_err(|e| {
            ClientError::invalid_request(format!("Invalid status code {}: {e}", self.status_code))
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Turn a 4xx/5xx response into [`ClientError::HttpStatus`].
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.status_code >= 400 {
            return Err(ClientError::http_status(self.status_code, self.url));
        }
        Ok(self)
    }

    /// Deserialize the payload.
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}
