use std::sync::Arc;

use async_trait::async_trait;
use formweaver_core::{AppError, AppResult};
use formweaver_domain::{
    Field, FieldCommon, FieldControl, FieldValue, FormState, HttpMethod, KeyValuePair,
    StatusRange, SubmitConfig, TextConfig,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use super::{
    build_headers, build_payload, build_request, build_url_with_params, SubmissionRequest,
    SubmissionResponse, SubmissionService, SubmissionTransport,
};

struct FakeTransport {
    requests: Mutex<Vec<SubmissionRequest>>,
    response: AppResult<SubmissionResponse>,
}

impl FakeTransport {
    fn responding(status: u16, body: Option<Value>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Ok(SubmissionResponse { status, body }),
        }
    }

    fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Err(AppError::Internal("connection refused".to_owned())),
        }
    }
}

#[async_trait]
impl SubmissionTransport for FakeTransport {
    async fn send(&self, request: SubmissionRequest) -> AppResult<SubmissionResponse> {
        self.requests.lock().await.push(request);
        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(AppError::Internal(message)) => Err(AppError::Internal(message.clone())),
            Err(_) => Err(AppError::Internal("unexpected".to_owned())),
        }
    }
}

fn text_field(id: &str) -> Field {
    let common = FieldCommon::new(id, "Field", false, 0).unwrap_or_else(|_| unreachable!());
    Field::new(common, FieldControl::Text(TextConfig::default()))
}

fn composite_field(id: &str) -> Field {
    let common = FieldCommon::new(id, "Group", false, 0).unwrap_or_else(|_| unreachable!());
    Field::new(common, FieldControl::Composite(Default::default()))
}

fn get_config(url: &str, params: Vec<KeyValuePair>) -> SubmitConfig {
    SubmitConfig {
        enabled: true,
        method: HttpMethod::Get,
        url: url.to_owned(),
        params,
        headers: Vec::new(),
        success_status_range: StatusRange::default(),
    }
}

#[test]
fn payload_always_carries_every_field_key() {
    let fields = vec![text_field("f1"), text_field("f2"), composite_field("g1")];
    let mut state = FormState::new();
    state.set("f1", FieldValue::from("hello"));

    let payload = build_payload(&state, &fields);
    assert_eq!(payload.get("f1"), Some(&json!("hello")));
    assert_eq!(payload.get("f2"), Some(&json!("")));
    assert!(!payload.contains_key("g1"));
}

#[test]
fn payload_keeps_lists_as_arrays() {
    let fields = vec![text_field("f1")];
    let mut state = FormState::new();
    state.set(
        "f1",
        FieldValue::Many(vec!["a".to_owned(), "b".to_owned()]),
    );

    let payload = build_payload(&state, &fields);
    assert_eq!(payload.get("f1"), Some(&json!(["a", "b"])));
}

#[test]
fn get_url_appends_static_params_then_field_values() {
    let config = get_config("https://x.test/s", vec![KeyValuePair::new("k", "v")]);
    let fields = vec![text_field("f1")];
    let mut state = FormState::new();
    state.set("f1", FieldValue::from("hello"));

    let url = build_url_with_params(&config, &state, &fields);
    assert_eq!(url, "https://x.test/s?k=v&f1=hello");
}

#[test]
fn get_url_skips_blank_static_params_and_joins_lists() {
    let config = get_config(
        "https://x.test/s",
        vec![KeyValuePair::new("", "v"), KeyValuePair::new("k", "")],
    );
    let fields = vec![text_field("f1")];
    let mut state = FormState::new();
    state.set(
        "f1",
        FieldValue::Many(vec!["a".to_owned(), "b".to_owned()]),
    );

    let url = build_url_with_params(&config, &state, &fields);
    assert_eq!(url, "https://x.test/s?f1=a%2Cb");
}

#[test]
fn invalid_base_url_is_returned_unchanged() {
    let config = get_config("not a url", vec![KeyValuePair::new("k", "v")]);
    let url = build_url_with_params(&config, &FormState::new(), &[text_field("f1")]);
    assert_eq!(url, "not a url");
}

#[test]
fn post_headers_force_json_content_type() {
    let config = SubmitConfig {
        headers: vec![
            KeyValuePair::new("Authorization", "Bearer t"),
            KeyValuePair::new("Content-Type", "text/plain"),
            KeyValuePair::new("X-Empty", ""),
        ],
        ..SubmitConfig::default()
    };

    let headers = build_headers(&config);
    assert_eq!(
        headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        headers.get("Authorization").map(String::as_str),
        Some("Bearer t")
    );
    assert!(!headers.contains_key("X-Empty"));
}

#[test]
fn get_request_carries_no_body_or_headers() {
    let config = get_config("https://x.test/s", Vec::new());
    let request = build_request(&config, &FormState::new(), &[text_field("f1")]);
    assert_eq!(request.method, HttpMethod::Get);
    assert!(request.body.is_none());
    assert!(request.headers.is_empty());
}

#[tokio::test]
async fn status_inside_range_is_success_with_fixed_message() {
    let transport = Arc::new(FakeTransport::responding(204, None));
    let service = SubmissionService::new(transport);

    let outcome = service
        .submit(&SubmitConfig::default(), &FormState::new(), &[])
        .await;
    assert!(outcome.success);
    assert!(!outcome.message.is_empty());
    assert!(outcome.payload.is_none());
}

#[tokio::test]
async fn failure_prefers_server_message() {
    let transport = Arc::new(FakeTransport::responding(
        422,
        Some(json!({"message": "name is taken"})),
    ));
    let service = SubmissionService::new(transport);

    let outcome = service
        .submit(&SubmitConfig::default(), &FormState::new(), &[])
        .await;
    assert!(!outcome.success);
    assert_eq!(outcome.message, "name is taken");
}

#[tokio::test]
async fn failure_without_server_message_reports_the_status() {
    let transport = Arc::new(FakeTransport::responding(404, Some(json!({"ok": false}))));
    let service = SubmissionService::new(transport);

    let outcome = service
        .submit(&SubmitConfig::default(), &FormState::new(), &[])
        .await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("404"));
}

#[tokio::test]
async fn transport_error_becomes_network_failure_outcome() {
    let transport = Arc::new(FakeTransport::failing());
    let service = SubmissionService::new(transport);

    let outcome = service
        .submit(&SubmitConfig::default(), &FormState::new(), &[])
        .await;
    assert!(!outcome.success);
    assert!(outcome.message.contains("network"));
}

#[tokio::test]
async fn post_request_reaches_transport_with_payload() {
    let transport = Arc::new(FakeTransport::responding(200, None));
    let service = SubmissionService::new(Arc::clone(&transport) as Arc<dyn SubmissionTransport>);

    let fields = vec![text_field("f1")];
    let mut state = FormState::new();
    state.set("f1", FieldValue::from("v"));

    let config = SubmitConfig {
        url: "https://x.test/submit".to_owned(),
        ..SubmitConfig::default()
    };
    let outcome = service.submit(&config, &state, &fields).await;
    assert!(outcome.success);

    let requests = transport.requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "https://x.test/submit");
    assert_eq!(requests[0].body, Some(json!({"f1": "v"})));
}
