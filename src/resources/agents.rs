//! Agent endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/agents";

/// Agents of the helpdesk.
///
/// Agents are created by promoting a contact, see
/// [`Contacts::make_agent`](super::Contacts::make_agent).
#[derive(Debug, Clone, Copy)]
pub struct Agents<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Agents<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists agents.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Returns the agent that owns the API key.
    pub async fn current(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&format!("{}/me", ENDPOINT), query).await
    }

    /// Gets a single agent.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }

    /// Updates an agent.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Deletes an agent, downgrading them to a contact.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }
}
