//! freshdesk - send a single request to the Freshdesk API
//!
//! Prints the decoded JSON response on stdout. Logs go to stderr.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHDESK_API_KEY`: API key
//! - `FRESHDESK_DOMAIN`: helpdesk subdomain, or
//! - `FRESHDESK_BASE_URL`: full base URL
//!
//! # Usage
//!
//! ```bash
//! freshdesk GET /tickets --query per_page=5
//! freshdesk PUT /tickets/42 --data '{"status": 4}'
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use reqwest::Method;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use freshdesk::{Config, FreshdeskClient, Payload, Query};

#[derive(Parser)]
#[command(name = "freshdesk")]
#[command(about = "Send a request to the Freshdesk API")]
#[command(version)]
struct Cli {
    /// HTTP method (GET, POST, PUT, DELETE)
    method: String,

    /// Endpoint path relative to the base URL, e.g. /tickets/42
    endpoint: String,

    /// JSON object to send as the request body
    #[arg(short, long)]
    data: Option<String>,

    /// Query parameter as key=value (can be repeated)
    #[arg(short, long)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freshdesk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let method = Method::from_bytes(cli.method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method: {}", cli.method))?;
    let data = cli.data.as_deref().map(parse_payload).transpose()?;
    let query = parse_query(&cli.query)?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(base_url = %config.base_url(), "Configuration loaded");

    let client = FreshdeskClient::new(&config).context("Failed to create Freshdesk client")?;

    let response = client
        .request(method, &cli.endpoint, data.as_ref(), query.as_ref())
        .await
        .map_err(|e| {
            let sanitized = e.sanitized_display(client.api_key_for_sanitization());
            tracing::error!(error = %sanitized, status = ?e.status(), "Request failed");
            anyhow::anyhow!(sanitized)
        })?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn parse_payload(raw: &str) -> Result<Payload> {
    match serde_json::from_str::<Value>(raw).context("--data is not valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => bail!("--data must be a JSON object"),
    }
}

fn parse_query(pairs: &[String]) -> Result<Option<Query>> {
    if pairs.is_empty() {
        return Ok(None);
    }

    let mut query = Query::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("query parameter must be key=value, got {:?}", pair);
        };
        query.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(Some(query))
}
