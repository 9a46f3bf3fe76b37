//! Discussion topic endpoints.

use serde_json::Value;

use super::{member, user_payload, user_query};
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/discussions/topics";

/// Topics posted in a forum.
#[derive(Debug, Clone, Copy)]
pub struct Topics<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Topics<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Creates a topic in a forum.
    pub async fn create(&self, forum_id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client
            .post(&format!("/discussions/forums/{}/topics", forum_id), data)
            .await
    }

    /// Gets a single topic.
    pub async fn view(&self, id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&member(ENDPOINT, id), query).await
    }

    /// Updates a topic.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Deletes a topic.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }

    /// Subscribes a user to a topic.
    pub async fn monitor(&self, id: u64, user_id: u64) -> Result<Value, FreshdeskError> {
        self.client
            .post(&follow(id), &user_payload(user_id))
            .await
    }

    /// Unsubscribes a user from a topic.
    pub async fn unmonitor(&self, id: u64, user_id: u64) -> Result<Value, FreshdeskError> {
        self.client
            .delete(&follow(id), user_query(Some(user_id)).as_ref())
            .await
    }

    /// Checks whether a user follows a topic.
    pub async fn monitor_status(&self, id: u64, user_id: Option<u64>) -> Result<Value, FreshdeskError> {
        self.client
            .get(&follow(id), user_query(user_id).as_ref())
            .await
    }

    /// Lists the topics a user follows.
    pub async fn monitored(&self, user_id: Option<u64>) -> Result<Value, FreshdeskError> {
        self.client
            .get(&format!("{}/followed_by", ENDPOINT), user_query(user_id).as_ref())
            .await
    }
}

fn follow(id: u64) -> String {
    format!("{}/follow", member(ENDPOINT, id))
}
