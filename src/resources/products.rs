//! Product endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::Query;

const ENDPOINT: &str = "/products";

/// Products configured in the helpdesk. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Products<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists products.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Gets a single product.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }
}
