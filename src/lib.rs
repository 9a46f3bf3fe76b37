//! # Freshdesk
//!
//! A client for the [Freshdesk](https://freshdesk.com) helpdesk REST API (v2).
//!
//! The crate has two layers:
//!
//! - a dispatcher, [`FreshdeskClient`], that builds URLs, authenticates,
//!   encodes bodies as JSON or multipart, and maps error statuses;
//! - resource accessors ([`Tickets`](resources::Tickets),
//!   [`Contacts`](resources::Contacts), ...) that map each operation onto an
//!   endpoint path.
//!
//! Payloads and responses are plain `serde_json` values. Freshdesk owns the
//! schema; this crate passes fields through unchanged.
//!
//! ## Modules
//!
//! - [`config`] - API key and tenant, with base URL derivation
//! - [`error`] - Error taxonomy keyed on HTTP status
//! - [`client`] - The request dispatcher
//! - [`resources`] - One accessor per API entity
//! - [`models`] - Payload aliases, attachments and body encoding
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads:
//!
//! - `FRESHDESK_API_KEY`: API key of the agent making the calls
//! - `FRESHDESK_DOMAIN`: helpdesk subdomain (`acme` for `acme.freshdesk.com`)
//! - `FRESHDESK_BASE_URL`: full base URL, overriding `FRESHDESK_DOMAIN`
//!
//! ## Example
//!
//! ```ignore
//! use freshdesk::{Config, FreshdeskClient, FreshdeskError};
//! use serde_json::json;
//!
//! async fn example() -> Result<(), FreshdeskError> {
//!     let config = Config::new("your-api-key", "acme")?;
//!     let client = FreshdeskClient::new(&config)?;
//!
//!     let data = json!({ "body": "We are on it." });
//!     client
//!         .conversations()
//!         .reply(42, data.as_object().unwrap())
//!         .await?;
//!
//!     match client.tickets().view(43, None).await {
//!         Err(FreshdeskError::NotFound { .. }) => println!("no such ticket"),
//!         other => println!("{:?}", other?),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;

pub use client::FreshdeskClient;
pub use config::{Config, Tenant};
pub use error::FreshdeskError;
pub use models::{Attachment, Payload, Query};
