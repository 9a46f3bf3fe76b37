//! Configuration for the Freshdesk client.
//!
//! A [`Config`] pairs an API key with a tenant and derives the base URL
//! every request is sent to. It is validated once, at construction, and
//! never changes afterwards.

use std::env;
use std::fmt;

use url::Url;

use crate::error::FreshdeskError;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "FRESHDESK_API_KEY";

/// Environment variable holding the helpdesk subdomain.
pub const ENV_DOMAIN: &str = "FRESHDESK_DOMAIN";

/// Environment variable holding a full base URL. Takes precedence over
/// [`ENV_DOMAIN`].
pub const ENV_BASE_URL: &str = "FRESHDESK_BASE_URL";

/// How the Freshdesk account is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tenant {
    /// A `*.freshdesk.com` subdomain, e.g. `acme` for `acme.freshdesk.com`.
    Subdomain(String),
    /// A complete base URL used verbatim, e.g. a custom domain or a mock server.
    BaseUrl(String),
}

impl Tenant {
    /// Returns the base URL for this tenant.
    pub fn base_url(&self) -> String {
        match self {
            Tenant::Subdomain(domain) => format!("https://{}.freshdesk.com/api/v2", domain),
            Tenant::BaseUrl(url) => url.clone(),
        }
    }
}

/// Configuration for connecting to Freshdesk.
///
/// The API key is stored but never logged; the `Debug` impl redacts it.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    tenant: Tenant,
    base_url: String,
}

impl Config {
    /// Creates a configuration for a `{domain}.freshdesk.com` account.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if the key is empty or the domain is
    /// not a single DNS label (letters, digits and inner hyphens).
    pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Result<Self, FreshdeskError> {
        Self::from_tenant(api_key, Tenant::Subdomain(domain.into()))
    }

    /// Creates a configuration whose base URL is `base_url`, unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if the key is empty or the URL is
    /// empty or not an http(s) URL.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, FreshdeskError> {
        Self::from_tenant(api_key, Tenant::BaseUrl(base_url.into()))
    }

    /// Creates a configuration from an explicit tenant.
    pub fn from_tenant(api_key: impl Into<String>, tenant: Tenant) -> Result<Self, FreshdeskError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(FreshdeskError::invalid_config("API key is empty."));
        }

        match &tenant {
            Tenant::Subdomain(domain) => Self::validate_subdomain(domain)?,
            Tenant::BaseUrl(url) => Self::validate_base_url(url)?,
        }

        let base_url = tenant.base_url();
        Ok(Config {
            api_key,
            tenant,
            base_url,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FRESHDESK_API_KEY` (required)
    /// - `FRESHDESK_BASE_URL`: full base URL, used verbatim
    /// - `FRESHDESK_DOMAIN`: subdomain, used when no base URL is set
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if a required variable is missing
    /// or a value fails validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, FreshdeskError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FreshdeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get(ENV_API_KEY).ok_or_else(|| FreshdeskError::missing_env(ENV_API_KEY))?;
        Self::validate_api_key(&api_key)?;

        let tenant = match (get(ENV_BASE_URL), get(ENV_DOMAIN)) {
            (Some(url), _) => Tenant::BaseUrl(url.trim().to_string()),
            (None, Some(domain)) => Tenant::Subdomain(domain.trim().to_string()),
            (None, None) => return Err(FreshdeskError::missing_env(ENV_DOMAIN)),
        };

        Self::from_tenant(api_key.trim(), tenant)
    }

    /// Returns the API key.
    ///
    /// This should only be used for authentication and sanitization, never logging.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the tenant this configuration addresses.
    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    /// Returns the derived base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The subdomain becomes part of the host the API key is sent to, so
    /// anything other than one DNS label is rejected.
    fn validate_subdomain(domain: &str) -> Result<(), FreshdeskError> {
        if domain.trim().is_empty() {
            return Err(FreshdeskError::invalid_config("Domain is empty."));
        }

        let is_label = domain.len() <= 63
            && domain.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !domain.starts_with('-')
            && !domain.ends_with('-');
        if !is_label {
            return Err(FreshdeskError::invalid_config(format!(
                "invalid domain {:?}: expected a subdomain such as \"acme\" for acme.freshdesk.com",
                domain
            )));
        }

        Ok(())
    }

    fn validate_base_url(url: &str) -> Result<(), FreshdeskError> {
        if url.trim().is_empty() {
            return Err(FreshdeskError::invalid_config("Domain is empty."));
        }

        let parsed = Url::parse(url)
            .map_err(|e| FreshdeskError::invalid_config(format!("invalid base URL: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FreshdeskError::invalid_config(
                "base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// Validates the API key is not a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreshdeskError> {
        let key_lower = key.to_lowercase();
        let placeholder_patterns = ["your_api_key", "your_key", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(FreshdeskError::invalid_config(
                    "FRESHDESK_API_KEY appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("tenant", &self.tenant)
            .field("base_url", &self.base_url)
            .finish()
    }
}
