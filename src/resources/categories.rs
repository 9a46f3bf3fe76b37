//! Discussion category endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/discussions/categories";

/// Forum categories.
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Categories<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists categories.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Creates a category.
    pub async fn create(&self, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.post(ENDPOINT, data).await
    }

    /// Gets a single category.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }

    /// Updates a category.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Deletes a category and everything in it.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }
}
