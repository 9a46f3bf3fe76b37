//! Company endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/companies";

/// Customer companies.
#[derive(Debug, Clone, Copy)]
pub struct Companies<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Companies<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists companies.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Creates a company.
    pub async fn create(&self, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.post(ENDPOINT, data).await
    }

    /// Gets a single company.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }

    /// Updates a company.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Deletes a company.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }

    /// Lists the company fields configured for the helpdesk.
    pub async fn fields(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get("/company_fields", query).await
    }
}
