//! Ticket endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/tickets";

/// Support tickets.
///
/// # Example
///
/// ```ignore
/// let mut data = Payload::new();
/// data.insert("subject".into(), "Printer on fire".into());
/// data.insert("email".into(), "jane@example.com".into());
/// data.insert("priority".into(), 4.into());
/// data.insert("status".into(), 2.into());
/// data.insert("attachments".into(), vec![Attachment::from_path("smoke.jpg").await?.into_value()].into());
///
/// let ticket = client.tickets().create(&data).await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tickets<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Tickets<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists tickets. Filters such as `filter`, `updated_since` and
    /// `include` go in `query`.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(ENDPOINT, query).await
    }

    /// Creates a ticket. Files listed under `attachments` switch the
    /// request to a multipart upload.
    pub async fn create(&self, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.post(ENDPOINT, data).await
    }

    /// Gets a single ticket.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }

    /// Updates a ticket.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Moves a ticket to the trash.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }

    /// Restores a deleted ticket.
    pub async fn restore(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client
            .put(&format!("{}/restore", member(ENDPOINT, id)), None)
            .await
    }

    /// Lists the replies and notes on a ticket.
    pub async fn conversations(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client
            .get(&format!("{}/conversations", member(ENDPOINT, id)), query)
            .await
    }

    /// Lists the time logged against a ticket.
    pub async fn time_entries(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client
            .get(&format!("{}/time_entries", member(ENDPOINT, id)), query)
            .await
    }

    /// Lists the ticket fields configured for the helpdesk.
    pub async fn fields(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get("/ticket_fields", query).await
    }

    /// Searches tickets with a filter expression such as
    /// `priority:3 AND status:2`.
    ///
    /// The API requires the expression in double quotes; they are added
    /// unless already present.
    pub async fn search(&self, filter: &str) -> Result<Value, FreshdeskError> {
        let mut query = Query::new();
        query.insert("query".to_string(), Value::String(quote_filter(filter)));
        self.client.get("/search/tickets", Some(&query)).await
    }
}

fn quote_filter(filter: &str) -> String {
    let filter = filter.trim();
    if filter.len() >= 2 && filter.starts_with('"') && filter.ends_with('"') {
        filter.to_string()
    } else {
        format!("\"{}\"", filter)
    }
}
