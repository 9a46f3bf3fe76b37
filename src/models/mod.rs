//! Data types exchanged with the Freshdesk API.
//!
//! Freshdesk entities are passed through as opaque JSON maps. This module
//! holds the aliases for those maps, the attachment type used for
//! multipart uploads, and the request body encoder.

mod attachment;
mod body;
mod common;

pub use attachment::*;
pub use body::*;
pub use common::*;
