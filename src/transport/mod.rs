//! One HTTP GET per call, JSON in, JSON out
//!
//! The network primitive is injected through [`HttpTransport`]. The rules for
//! turning a status and body into a JSON value or an error live in
//! [`request_json`] so every transport shares them.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::error::{DictionaryError, DictionaryResult};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Raw HTTP response as seen by the adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only `200 OK` is a success; every other status is a backend error
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Perform a GET and hand back status and body.
///
/// Implementations must not retry. A failure to obtain any response is a
/// `DictionaryError::Transport`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> DictionaryResult<HttpResponse>;
}

/// Issue one GET and parse the response body as JSON.
///
/// Non-success responses become `DictionaryError::Backend`, carrying the body
/// itself when it is JSON and a `{status, error}` object otherwise.
pub async fn request_json(transport: &dyn HttpTransport, url: &str) -> DictionaryResult<Value> {
    let response = transport.get(url).await?;
    parse_response(response)
}

fn parse_response(response: HttpResponse) -> DictionaryResult<Value> {
    if !response.is_success() {
        debug!(status = response.status, "Backend returned non-success status");
        if !is_json_string(&response.body) {
            return Err(DictionaryError::from_status(response.status, &response.body));
        }
        return Err(DictionaryError::Backend(serde_json::from_str(&response.body)?));
    }

    Ok(serde_json::from_str(&response.body)?)
}

/// True if `s` parses as a JSON document
pub fn is_json_string(s: &str) -> bool {
    serde_json::from_str::<Value>(s).is_ok()
}
