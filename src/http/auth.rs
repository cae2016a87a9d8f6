//! Authentication header helpers.
//!
//! These only format headers. Nothing in the crate checks credentials.

use crate::error::{ClientError, ClientResult};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, PROXY_AUTHORIZATION,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header used by [`Auth::api_key`].
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Whether a header named `name` carries a credential.
///
/// Values of these headers are marked sensitive and redacted from `Debug`
/// output, also when they are passed as plain default headers.
pub fn is_credential_header(name: &str) -> bool {
    [
        AUTHORIZATION.as_str(),
        PROXY_AUTHORIZATION.as_str(),
        DEFAULT_API_KEY_HEADER,
    ]
    .iter()
    .any(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
}

/// Credentials attached to every request of an HTTP client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Auth {
    /// `Authorization: Bearer <token>`
    Bearer { token: String },
    /// `<header>: <key>`
    ApiKey { header: String, key: String },
    /// `Authorization: Basic base64(<username>:<password>)`
    Basic { username: String, password: String },
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
            Self::ApiKey { header, .. } => f
                .debug_struct("ApiKey")
                .field("header", header)
                .field("key", &"<redacted>")
                .finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

impl Auth {
    /// Bearer token auth. A leading `Bearer ` on the token is dropped so the
    /// prefix is never doubled.
    pub fn bearer(token: impl AsRef<str>) -> Self {
        let token = token.as_ref().trim();
        let token = token
            .strip_prefix("Bearer ")
            .or_else(|| token.strip_prefix("bearer "))
            .unwrap_or(token);
        Self::Bearer {
            token: token.trim().to_string(),
        }
    }

    /// API key sent in the `X-API-Key` header.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            header: DEFAULT_API_KEY_HEADER.to_string(),
            key: key.into(),
        }
    }

    pub fn api_key_with_header(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ApiKey {
            header: header.into(),
            key: key.into(),
        }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The header name and a sensitive header value for these credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConfigurationError`] if the header name or the
    /// credential contains characters not allowed in a header.
    pub fn header(&self) -> ClientResult<(HeaderName, HeaderValue)> {
        let (name, raw) = match self {
            Self::Bearer { token } => (AUTHORIZATION, format!("Bearer {token}")),
            Self::ApiKey { header, key } => {
                let name = HeaderName::from_bytes(header.as_bytes()).map_err(|e| {
                    ClientError::configuration_error(format!(
                        "Invalid API key header name '{header}': {e}"
                    ))
                })?;
                (name, key.clone())
            }
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                (AUTHORIZATION, format!("Basic {encoded}"))
            }
        };

        let mut value = HeaderValue::from_str(&raw).map_err(|e| {
            ClientError::configuration_error(format!("Invalid credential format: {e}"))
        })?;
        value.set_sensitive(true);

        Ok((name, value))
    }

    /// Insert the auth header into `headers`, replacing any previous value.
    pub fn apply(&self, headers: &mut HeaderMap) -> ClientResult<()> {
        let (name, value) = self.header()?;
        headers.insert(name, value);
        Ok(())
    }
}
