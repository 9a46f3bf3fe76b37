//! Contact endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/contacts";

/// Customers who raise tickets.
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists contacts.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Creates a contact. An `avatar` can be uploaded through `attachments`.
    pub async fn create(&self, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.post(ENDPOINT, data).await
    }

    /// Gets a single contact.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }

    /// Updates a contact.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Soft-deletes a contact.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }

    /// Restores a soft-deleted contact.
    pub async fn restore(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client
            .put(&format!("{}/restore", member(ENDPOINT, id)), None)
            .await
    }

    /// Converts a contact into an agent.
    pub async fn make_agent(&self, id: u64, data: Option<&Payload>) -> Result<Value, FreshdeskError> {
        self.client
            .put(&format!("{}/make_agent", member(ENDPOINT, id)), data)
            .await
    }

    /// Lists the contact fields configured for the helpdesk.
    pub async fn fields(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get("/contact_fields", query).await
    }
}
