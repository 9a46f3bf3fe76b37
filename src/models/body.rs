//! Request body encoding.
//!
//! A payload with a non-empty `attachments` entry is sent as
//! `multipart/form-data`; any other payload is sent as JSON.

use reqwest::multipart::Form;
use reqwest::RequestBuilder;
use serde_json::Value;

use super::attachment::Attachment;
use super::common::{scalar_text, Payload};
use crate::error::FreshdeskError;

/// Payload key that switches a request to multipart encoding.
pub const ATTACHMENTS_KEY: &str = "attachments";

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// A plain `name=contents` field.
    Text {
        /// Form field name.
        name: String,
        /// Field contents.
        contents: String,
    },
    /// A file part, sent as given.
    File(Attachment),
}

/// An encoded request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body at all.
    Empty,
    /// A JSON document.
    Json(Value),
    /// A multipart form, in payload field order.
    Multipart(Vec<FormField>),
}

impl RequestBody {
    /// Chooses the encoding for a payload and encodes it.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::InvalidAttachment` if the `attachments`
    /// entry is non-empty but does not hold attachment objects.
    pub fn encode(data: Option<&Payload>) -> Result<Self, FreshdeskError> {
        let Some(data) = data else {
            return Ok(RequestBody::Empty);
        };

        if !has_attachments(data) {
            return Ok(RequestBody::Json(Value::Object(data.clone())));
        }

        let mut fields = Vec::with_capacity(data.len());
        for (name, value) in data {
            if name == ATTACHMENTS_KEY {
                match value {
                    Value::Array(entries) => {
                        for entry in entries {
                            fields.push(FormField::File(Attachment::from_value(entry)?));
                        }
                    }
                    Value::Object(_) => fields.push(FormField::File(Attachment::from_value(value)?)),
                    other => {
                        return Err(FreshdeskError::invalid_attachment(format!(
                            "`attachments` must be a list of files, got {}",
                            json_type(other)
                        )))
                    }
                }
                continue;
            }

            push_text_fields(&mut fields, name, value);
        }

        Ok(RequestBody::Multipart(fields))
    }

    /// Returns true if this body is a multipart form.
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }

    /// Attaches this body to a request.
    pub(crate) fn apply(self, req: RequestBuilder) -> Result<RequestBuilder, FreshdeskError> {
        match self {
            RequestBody::Empty => Ok(req),
            RequestBody::Json(value) => Ok(req.json(&value)),
            RequestBody::Multipart(fields) => {
                let mut form = Form::new();
                for field in fields {
                    form = match field {
                        FormField::Text { name, contents } => form.text(name, contents),
                        FormField::File(attachment) => {
                            let name = attachment.name.clone();
                            form.part(name, attachment.into_part()?)
                        }
                    };
                }
                Ok(req.multipart(form))
            }
        }
    }
}

/// Returns true when the payload's `attachments` entry is present and non-empty.
fn has_attachments(data: &Payload) -> bool {
    match data.get(ATTACHMENTS_KEY) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Bool(true)) => true,
    }
}

/// Appends the text parts for one payload field.
///
/// List fields use Freshdesk's `field[]` naming, one part per element.
fn push_text_fields(fields: &mut Vec<FormField>, name: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            let name = if name.ends_with("[]") {
                name.to_string()
            } else {
                format!("{}[]", name)
            };
            for item in items {
                if let Some(contents) = scalar_text(item) {
                    fields.push(FormField::Text {
                        name: name.clone(),
                        contents,
                    });
                }
            }
        }
        other => {
            if let Some(contents) = scalar_text(other) {
                fields.push(FormField::Text {
                    name: name.to_string(),
                    contents,
                });
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
