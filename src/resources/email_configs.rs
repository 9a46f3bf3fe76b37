//! Email config endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::Query;

const ENDPOINT: &str = "/email_configs";

/// Support mailboxes. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct EmailConfigs<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> EmailConfigs<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists email configs.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Gets a single email config.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }
}
