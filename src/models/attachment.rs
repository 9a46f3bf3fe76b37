//! File attachments for multipart uploads.
//!
//! Tickets, replies and notes accept files. Attachments travel inside a
//! payload's `attachments` entry as JSON objects, so a payload stays a plain
//! map until the dispatcher encodes it.

use std::path::Path;

use reqwest::multipart::Part;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FreshdeskError;

/// Form field name Freshdesk expects for uploaded files.
pub const ATTACHMENT_FIELD: &str = "attachments[]";

fn default_field_name() -> String {
    ATTACHMENT_FIELD.to_string()
}

/// File contents, either raw bytes or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttachmentContents {
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl AttachmentContents {
    fn into_bytes(self) -> Vec<u8> {
        match self {
            AttachmentContents::Text(text) => text.into_bytes(),
            AttachmentContents::Bytes(bytes) => bytes,
        }
    }
}

/// A single file part of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Form field name, `attachments[]` unless overridden.
    #[serde(default = "default_field_name")]
    pub name: String,

    /// File name reported to Freshdesk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// MIME type of the contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// The file contents.
    pub contents: AttachmentContents,
}

impl Attachment {
    /// Creates an attachment from in-memory bytes.
    pub fn new(filename: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: default_field_name(),
            filename: Some(filename.into()),
            content_type: None,
            contents: AttachmentContents::Bytes(contents.into()),
        }
    }

    /// Reads an attachment from disk, naming it after the file.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        Ok(Self::new(filename, contents))
    }

    /// Sets the form field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Converts this attachment into the JSON object stored in a payload's
    /// `attachments` entry.
    pub fn into_value(self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), Value::String(self.name));
        if let Some(filename) = self.filename {
            map.insert("filename".to_string(), Value::String(filename));
        }
        if let Some(content_type) = self.content_type {
            map.insert("content_type".to_string(), Value::String(content_type));
        }
        let contents = match self.contents {
            AttachmentContents::Text(text) => Value::String(text),
            AttachmentContents::Bytes(bytes) => {
                Value::Array(bytes.into_iter().map(Value::from).collect())
            }
        };
        map.insert("contents".to_string(), contents);
        Value::Object(map)
    }

    /// Reads an attachment back out of a payload entry.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::InvalidAttachment` if the value is not an
    /// attachment object.
    pub fn from_value(value: &Value) -> Result<Self, FreshdeskError> {
        serde_json::from_value(value.clone())
            .map_err(|e| FreshdeskError::invalid_attachment(e.to_string()))
    }

    /// Builds the reqwest multipart part for this attachment.
    pub(crate) fn into_part(self) -> Result<Part, FreshdeskError> {
        let mut part = Part::bytes(self.contents.into_bytes());
        if let Some(filename) = self.filename {
            part = part.file_name(filename);
        }
        if let Some(content_type) = self.content_type {
            part = part.mime_str(&content_type).map_err(|e| {
                FreshdeskError::invalid_attachment(format!(
                    "invalid content type {:?}: {}",
                    content_type, e
                ))
            })?;
        }
        Ok(part)
    }
}
