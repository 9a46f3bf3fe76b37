//! Business hours endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::Query;

const ENDPOINT: &str = "/business_hours";

/// Working hours used for SLA calculations. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct BusinessHours<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> BusinessHours<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists business hours.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Gets a single business hours entry.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }
}
