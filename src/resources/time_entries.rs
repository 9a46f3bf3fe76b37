//! Time entry endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/time_entries";

/// Time logged by agents. Entries are created under a ticket.
#[derive(Debug, Clone, Copy)]
pub struct TimeEntries<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> TimeEntries<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists time entries across all tickets.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Logs time against a ticket.
    pub async fn create(&self, ticket_id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client
            .post(&format!("/tickets/{}/time_entries", ticket_id), data)
            .await
    }

    /// Updates a time entry.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Starts or stops the timer of a time entry.
    pub async fn toggle(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client
            .put(&format!("{}/toggle_timer", member(ENDPOINT, id)), None)
            .await
    }

    /// Deletes a time entry.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }
}
