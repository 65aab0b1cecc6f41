//! Authenticated request execution and HTTP error mapping.

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{CaptureError, Result};

/// Request body variants the backends accept.
pub enum Payload {
    /// Multipart form, sent as-is.
    Multipart(Form),
    /// Structured body, serialized to JSON.
    Json(Value),
    /// No body.
    Empty,
}

/// Executes authenticated requests against the Capture backends.
///
/// Every request carries `Authorization: token <value>`. Non-success
/// responses become typed errors; nothing is retried. The only side effect
/// is the network call itself.
#[derive(Debug)]
pub struct RequestExecutor {
    http: Client,
    token: String,
}

impl RequestExecutor {
    pub fn new(http: Client, token: String) -> Self {
        Self { http, token }
    }

    /// Send one request and parse the JSON response body.
    ///
    /// On a non-success status the JSON error body is consulted for a human
    /// message (`detail`, then `message`), falling back to a generic string,
    /// and the status is mapped to an error code. Transport failures map to
    /// a network error without a status.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        payload: Payload,
        nid: Option<&str>,
    ) -> Result<Value> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("token {}", self.token));

        request = match payload {
            Payload::Multipart(form) => request.multipart(form),
            Payload::Json(body) => request.json(&body),
            Payload::Empty => request,
        };

        debug!(%method, url, "sending request");

        let response = request.send().await.map_err(|e| {
            let error = CaptureError::network(format!("Network error: {e}"), None);
            match nid {
                Some(nid) => error.with_nid(nid),
                None => error,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let fallback = format!("API request failed with status {}", status.as_u16());
            let message = match response.json::<Value>().await {
                Ok(body) => body
                    .get("detail")
                    .and_then(Value::as_str)
                    .or_else(|| body.get("message").and_then(Value::as_str))
                    .map(str::to_owned)
                    .unwrap_or(fallback),
                Err(_) => fallback,
            };
            debug!(status = status.as_u16(), "request failed");
            return Err(CaptureError::from_status(status.as_u16(), message, nid));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CaptureError::network(format!("invalid JSON response: {e}"), None))
    }

    /// [`execute`](Self::execute), then deserialize into `T`.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        payload: Payload,
        nid: Option<&str>,
    ) -> Result<T> {
        let value = self.execute(method, url, payload, nid).await?;
        serde_json::from_value(value)
            .map_err(|e| CaptureError::network(format!("unexpected response body: {e}"), None))
    }
}
