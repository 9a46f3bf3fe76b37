//! Discussion forum endpoints.

use serde_json::Value;

use super::{member, user_payload, user_query};
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/discussions/forums";

/// Forums inside a discussion category.
#[derive(Debug, Clone, Copy)]
pub struct Forums<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Forums<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Creates a forum in a category.
    pub async fn create(&self, category_id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client
            .post(&format!("/discussions/categories/{}/forums", category_id), data)
            .await
    }

    /// Gets a single forum.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }

    /// Updates a forum.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Deletes a forum.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }

    /// Subscribes a user to a forum.
    pub async fn monitor(&self, id: u64, user_id: u64) -> Result<Value, FreshdeskError> {
        self.client
            .post(&follow(id), &user_payload(user_id))
            .await
    }

    /// Unsubscribes a user from a forum.
    pub async fn unmonitor(&self, id: u64, user_id: u64) -> Result<Value, FreshdeskError> {
        self.client
            .delete(&follow(id), user_query(Some(user_id)).as_ref())
            .await
    }

    /// Checks whether a user follows a forum. Without a user, the
    /// authenticated agent is checked.
    pub async fn monitor_status(&self, id: u64, user_id: Option<u64>) -> Result<Value, FreshdeskError> {
        self.client
            .get(&follow(id), user_query(user_id).as_ref())
            .await
    }
}

fn follow(id: u64) -> String {
    format!("{}/follow", member(ENDPOINT, id))
}
