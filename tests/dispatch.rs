mod common;

use common::{payload, setup, API_KEY};
use freshdesk::{Attachment, Config, FreshdeskError};
use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{
    basic_auth, body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, ResponseTemplate};

// ── Authentication and URL ──────────────────────────────────────

#[tokio::test]
async fn sends_basic_auth_with_api_key_and_x() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(basic_auth(API_KEY, "X"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
        .expect(1)
        .mount(&server)
        .await;

    let tickets = client.request(Method::GET, "/tickets", None, None).await.unwrap();
    assert_eq!(tickets, json!([{ "id": 1 }]));
}

#[tokio::test]
async fn appends_query_parameters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(query_param("per_page", "5"))
        .and(query_param("include", "requester"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = payload(json!({ "per_page": 5, "include": "requester" }));
    client
        .request(Method::GET, "/tickets", None, Some(&query))
        .await
        .unwrap();
}

#[test]
fn subdomain_base_url() {
    let config = Config::new(API_KEY, "acme").unwrap();
    let client = freshdesk::FreshdeskClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "https://acme.freshdesk.com/api/v2");
}

#[test]
fn missing_credentials_fail_at_construction() {
    assert!(matches!(
        Config::new("", "acme"),
        Err(FreshdeskError::Config(_))
    ));
    assert!(matches!(
        Config::new(API_KEY, ""),
        Err(FreshdeskError::Config(_))
    ));
}

// ── Body encoding ───────────────────────────────────────────────

#[tokio::test]
async fn plain_payload_is_sent_as_json() {
    let (server, client) = setup().await;
    let data = json!({ "subject": "Printer on fire", "priority": 4 });

    Mock::given(method("POST"))
        .and(path("/api/v2/tickets"))
        .and(header("content-type", "application/json"))
        .and(body_json(&data))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .request(Method::POST, "/tickets", Some(&payload(data)), None)
        .await
        .unwrap();
    assert_eq!(created["id"], 7);
}

#[tokio::test]
async fn empty_attachments_are_sent_as_json() {
    let (server, client) = setup().await;
    let data = json!({ "subject": "No files", "attachments": [] });

    Mock::given(method("POST"))
        .and(path("/api/v2/tickets"))
        .and(header("content-type", "application/json"))
        .and(body_json(&data))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 8 })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .request(Method::POST, "/tickets", Some(&payload(data)), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn attachments_are_sent_as_multipart() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/tickets"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"subject\""))
        .and(body_string_contains("Printer on fire"))
        .and(body_string_contains("name=\"tags[]\""))
        .and(body_string_contains("name=\"attachments[]\"; filename=\"smoke.txt\""))
        .and(body_string_contains("lots of smoke"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 9 })))
        .expect(1)
        .mount(&server)
        .await;

    let data = payload(json!({
        "subject": "Printer on fire",
        "tags": ["hardware"],
        "attachments": [Attachment::new("smoke.txt", b"lots of smoke".to_vec()).into_value()]
    }));
    let created = client
        .request(Method::POST, "/tickets", Some(&data), None)
        .await
        .unwrap();
    assert_eq!(created["id"], 9);
}

#[tokio::test]
async fn malformed_attachments_fail_before_sending() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let data = payload(json!({ "attachments": ["smoke.txt"] }));
    let err = client
        .request(Method::POST, "/tickets", Some(&data), None)
        .await
        .unwrap_err();
    assert!(matches!(err, FreshdeskError::InvalidAttachment(_)));
}

#[tokio::test]
async fn no_payload_sends_no_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/3/restore"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .request(Method::PUT, "/tickets/3/restore", None, None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

// ── Responses ───────────────────────────────────────────────────

#[tokio::test]
async fn empty_response_decodes_to_null() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = client
        .request(Method::DELETE, "/tickets/3", None, None)
        .await
        .unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn non_json_success_body_is_a_serialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.get("/tickets", None).await.unwrap_err();
    assert!(matches!(err, FreshdeskError::Serialization(_)));
}

// ── Error mapping ───────────────────────────────────────────────

async fn error_for(status: u16) -> FreshdeskError {
    let (server, client) = setup().await;
    let body = json!({ "description": "failed", "errors": [] });

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1"))
        .respond_with(ResponseTemplate::new(status).set_body_json(&body))
        .mount(&server)
        .await;

    let err = client.get("/tickets/1", None).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(err.body().unwrap()).unwrap(),
        body
    );
    err
}

#[tokio::test]
async fn statuses_map_to_error_kinds() {
    assert!(matches!(error_for(401).await, FreshdeskError::Authentication { .. }));
    assert!(matches!(error_for(403).await, FreshdeskError::AccessDenied { .. }));
    assert!(matches!(error_for(404).await, FreshdeskError::NotFound { .. }));
    assert!(matches!(error_for(405).await, FreshdeskError::MethodNotAllowed { .. }));
    assert!(matches!(
        error_for(406).await,
        FreshdeskError::UnsupportedAcceptHeader { .. }
    ));
    assert!(matches!(error_for(409).await, FreshdeskError::ConflictingState { .. }));
    assert!(matches!(
        error_for(415).await,
        FreshdeskError::UnsupportedContentType { .. }
    ));
    assert!(matches!(error_for(422).await, FreshdeskError::Validation { .. }));
    assert!(matches!(error_for(429).await, FreshdeskError::RateLimitExceeded { .. }));
    assert!(matches!(error_for(400).await, FreshdeskError::Api { .. }));
    assert!(matches!(error_for(500).await, FreshdeskError::Api { .. }));
}

#[tokio::test]
async fn rate_limit_keeps_retry_after() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "60"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get("/tickets", None).await.unwrap_err();
    assert!(err.is_rate_limit());
    assert_eq!(err.retry_after(), Some(Duration::from_secs(60)));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Port 1 is reserved and refuses connections.
    let config = Config::with_base_url(API_KEY, "http://127.0.0.1:1/api/v2").unwrap();
    let client = freshdesk::FreshdeskClient::new(&config).unwrap();

    let err = client.get("/tickets", None).await.unwrap_err();
    assert!(matches!(err, FreshdeskError::Http(_)));
    assert_eq!(err.status(), None);
    assert!(!err.sanitized_display(API_KEY).contains(API_KEY));
}
