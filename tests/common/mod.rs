#![allow(dead_code)]

use freshdesk::{Config, FreshdeskClient, Payload};
use serde_json::Value;
use wiremock::MockServer;

pub const API_KEY: &str = "test_api_key";

/// Starts a mock server and a client pointed at `{server}/api/v2`.
pub async fn setup() -> (MockServer, FreshdeskClient) {
    let server = MockServer::start().await;
    let config = Config::with_base_url(API_KEY, format!("{}/api/v2", server.uri())).unwrap();
    let client = FreshdeskClient::new(&config).unwrap();
    (server, client)
}

pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
