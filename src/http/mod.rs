//! HTTP request helper
//!
//! - `client` - [`HttpClient`]: URL joining, request shaping, dispatch
//! - `request` - [`PreparedRequest`]
//! - `response` - [`Response`]
//! - `transport` - [`Transport`] seam and the [`CannedTransport`]
//! - `auth` - [`Auth`] header helpers

pub mod auth;
pub mod client;
pub mod request;
pub mod response;
pub mod transport;

pub use auth::{is_credential_header, Auth, DEFAULT_API_KEY_HEADER};
pub use client::HttpClient;
pub use request::{PreparedRequest, REQUEST_ID_HEADER};
pub use response::Response;
pub use transport::{CannedTransport, Transport};

#[cfg(test)]
pub use transport::MockTransport;
