//! Conversation endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::Payload;

const ENDPOINT: &str = "/conversations";

/// Replies and notes on tickets.
///
/// Conversations are listed through
/// [`Tickets::conversations`](super::Tickets::conversations).
#[derive(Debug, Clone, Copy)]
pub struct Conversations<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Conversations<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Replies to a ticket.
    pub async fn reply(&self, ticket_id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client
            .post(&format!("/tickets/{}/reply", ticket_id), data)
            .await
    }

    /// Adds a note to a ticket.
    pub async fn note(&self, ticket_id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client
            .post(&format!("/tickets/{}/notes", ticket_id), data)
            .await
    }

    /// Updates a conversation.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Deletes a conversation.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }
}
