use crate::error::{ClientError, ClientResult};
use crate::http::{PreparedRequest, Response};
use crate::logging::log_trace;

use reqwest::Method;
use serde_json::json;

/// Turns a prepared request into a response
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    fn send(&self, request: &PreparedRequest) -> ClientResult<Response>;
}

/// Answers every request with a fixed response and never touches the network.
///
/// | Method | Status |
/// |--------|--------|
/// | GET | 200 |
/// | POST | 201 |
/// | PUT | 200 |
/// | DELETE | 204 |
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedTransport;

impl Transport for CannedTransport {
    fn send(&self, request: &PreparedRequest) -> ClientResult<Response> {
        let (status_code, data) = match *request.method() {
            Method::GET => (
                200,
                json!({
                    "message": "GET request successful",
                    "endpoint": request.endpoint(),
                }),
            ),
            Method::POST => (
                201,
                json!({ "message": "POST request successful", "created": true }),
            ),
            Method::PUT => (
                200,
                json!({ "message": "PUT request successful", "updated": true }),
            ),
            Method::DELETE => (204, json!({ "message": "DELETE request successful" })),
            ref other => {
                return Err(ClientError::invalid_request(format!(
                    "Unsupported method: {other}"
                )))
            }
        };

        log_trace!(
            method = %request.method(),
            url = %request.url(),
            status_code = status_code,
            "Canned response produced"
        );

        Ok(Response::new(status_code, data).with_url(request.url().as_str()))
    }
}
