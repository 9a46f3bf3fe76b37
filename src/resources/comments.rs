//! Discussion comment endpoints.

use serde_json::Value;

use super::member;
use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::models::{Payload, Query};

const ENDPOINT: &str = "/discussions/comments";

/// Comments on forum topics.
#[derive(Debug, Clone, Copy)]
pub struct Comments<'a> {
    client: &'a FreshdeskClient,
}

impl<'a> Comments<'a> {
    pub(crate) fn new(client: &'a FreshdeskClient) -> Self {
        Self { client }
    }

    /// Lists the comments on a topic.
    pub async fn all(&self, topic_id: u64, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        self.client.get(&topic_comments(topic_id), query).await
    }

    /// Comments on a topic.
    pub async fn create(&self, topic_id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.post(&topic_comments(topic_id), data).await
    }

    /// Updates a comment.
    pub async fn update(&self, id: u64, data: &Payload) -> Result<Value, FreshdeskError> {
        self.client.put(&member(ENDPOINT, id), Some(data)).await
    }

    /// Deletes a comment.
    pub async fn delete(&self, id: u64) -> Result<Value, FreshdeskError> {
        self.client.delete(&member(ENDPOINT, id), None).await
    }
}

fn topic_comments(topic_id: u64) -> String {
    format!("/discussions/topics/{}/comments", topic_id)
}
