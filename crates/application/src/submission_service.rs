use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use formweaver_core::AppResult;
use formweaver_domain::{Field, FieldValue, FormState, HttpMethod, SubmitConfig};
use serde_json::{Map, Value};
use tracing::warn;
use url::Url;

use crate::messages;

/// One concrete HTTP request derived from form state and submit recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Fully built request URL; for GET it already carries every query
    /// parameter.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// JSON body for POST submissions.
    pub body: Option<Value>,
}

/// Raw result of delivering one submission request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body parsed as JSON; `None` when the body is absent or
    /// not valid JSON.
    pub body: Option<Value>,
}

/// Delivers submission requests to the configured endpoint.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Sends the request and returns the raw response.
    async fn send(&self, request: SubmissionRequest) -> AppResult<SubmissionResponse>;
}

/// User-facing result of one submission attempt. Never an error; transport
/// failures surface as an unsuccessful outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether the response status fell inside the success range.
    pub success: bool,
    /// Message for the global notification.
    pub message: String,
    /// Parsed response body, when any.
    pub payload: Option<Value>,
}

fn query_value(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Single(text)) => text.clone(),
        Some(FieldValue::Many(values)) => values.join(","),
        None => String::new(),
    }
}

fn body_value(value: Option<&FieldValue>) -> Value {
    match value {
        Some(FieldValue::Single(text)) => Value::String(text.clone()),
        Some(FieldValue::Many(values)) => Value::Array(
            values
                .iter()
                .map(|value| Value::String(value.clone()))
                .collect(),
        ),
        None => Value::String(String::new()),
    }
}

/// Builds the effective JSON body: one entry per non-composite field in
/// list order, absent values normalized to an empty string. Composite
/// containers contribute nothing.
#[must_use]
pub fn build_payload(state: &FormState, fields: &[Field]) -> Map<String, Value> {
    let mut payload = Map::new();
    for field in fields {
        if field.is_composite() {
            continue;
        }
        payload.insert(field.id().to_owned(), body_value(state.get(field.id())));
    }
    payload
}

/// Appends the configured static parameters and one parameter per
/// non-composite field to the URL's query string.
///
/// An unparsable base URL is returned unchanged; the mistake is an
/// editor-time one the runtime only logs.
#[must_use]
pub fn build_url_with_params(config: &SubmitConfig, state: &FormState, fields: &[Field]) -> String {
    let mut url = match Url::parse(&config.url) {
        Ok(url) => url,
        Err(error) => {
            warn!(url = %config.url, %error, "invalid submit URL, leaving unchanged");
            return config.url.clone();
        }
    };

    {
        let mut query = url.query_pairs_mut();
        for param in &config.params {
            if param.is_populated() {
                query.append_pair(&param.key, &param.value);
            }
        }
        for field in fields {
            if field.is_composite() {
                continue;
            }
            query.append_pair(field.id(), &query_value(state.get(field.id())));
        }
    }

    url.to_string()
}

/// Builds the POST header map: configured entries with empty keys or
/// values skipped, then `Content-Type: application/json` forced over
/// whatever was configured.
#[must_use]
pub fn build_headers(config: &SubmitConfig) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    for header in &config.headers {
        if header.is_populated() {
            headers.insert(header.key.clone(), header.value.clone());
        }
    }
    headers.insert("Content-Type".to_owned(), "application/json".to_owned());
    headers
}

/// Transforms form state, field list and submit recipe into one concrete
/// HTTP request.
#[must_use]
pub fn build_request(config: &SubmitConfig, state: &FormState, fields: &[Field]) -> SubmissionRequest {
    match config.method {
        HttpMethod::Get => SubmissionRequest {
            method: HttpMethod::Get,
            url: build_url_with_params(config, state, fields),
            headers: BTreeMap::new(),
            body: None,
        },
        HttpMethod::Post => SubmissionRequest {
            method: HttpMethod::Post,
            url: config.url.clone(),
            headers: build_headers(config),
            body: Some(Value::Object(build_payload(state, fields))),
        },
    }
}

fn server_message(body: Option<&Value>) -> Option<String> {
    body.and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Application service delivering form submissions over a transport.
#[derive(Clone)]
pub struct SubmissionService {
    transport: Arc<dyn SubmissionTransport>,
}

impl SubmissionService {
    /// Creates a new submission service from a transport implementation.
    #[must_use]
    pub fn new(transport: Arc<dyn SubmissionTransport>) -> Self {
        Self { transport }
    }

    /// Builds the request, delivers it and classifies the result by the
    /// configured status range. Never returns an error: transport and
    /// parse failures become unsuccessful outcomes.
    pub async fn submit(
        &self,
        config: &SubmitConfig,
        state: &FormState,
        fields: &[Field],
    ) -> SubmitOutcome {
        let request = build_request(config, state, fields);

        match self.transport.send(request).await {
            Ok(response) => {
                if config.success_status_range.contains(response.status) {
                    SubmitOutcome {
                        success: true,
                        message: messages::SUBMIT_SUCCESS.to_owned(),
                        payload: response.body,
                    }
                } else {
                    let message = server_message(response.body.as_ref())
                        .unwrap_or_else(|| messages::submit_failed_status(response.status));
                    SubmitOutcome {
                        success: false,
                        message,
                        payload: response.body,
                    }
                }
            }
            Err(error) => {
                warn!(%error, "submission transport failed");
                SubmitOutcome {
                    success: false,
                    message: messages::SUBMIT_NETWORK_FAILURE.to_owned(),
                    payload: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
