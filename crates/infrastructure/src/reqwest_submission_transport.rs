//! HTTP transport for form submissions, backed by reqwest.

use async_trait::async_trait;
use formweaver_application::{SubmissionRequest, SubmissionResponse, SubmissionTransport};
use formweaver_core::{AppError, AppResult};
use formweaver_domain::HttpMethod;
use serde_json::Value;
use tracing::debug;

/// Delivers submissions over HTTP with the client's default timeout.
///
/// No retry is attempted; a failed attempt is terminal and needs a new
/// user-initiated submit.
#[derive(Clone)]
pub struct ReqwestSubmissionTransport {
    http_client: reqwest::Client,
}

impl ReqwestSubmissionTransport {
    /// Creates a transport using the given client.
    #[must_use]
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

impl Default for ReqwestSubmissionTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl SubmissionTransport for ReqwestSubmissionTransport {
    async fn send(&self, request: SubmissionRequest) -> AppResult<SubmissionResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.http_client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|error| {
            AppError::Internal(format!("submission transport error: {error}"))
        })?;

        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        debug!(status, "submission response received");

        Ok(SubmissionResponse { status, body })
    }
}
