//! Configuration for the pagegen pipelines.
//!
//! All credentials and database ids come from the process environment at
//! startup, but are captured once into an explicit [`Config`] value that is
//! threaded through client constructors. Nothing in this crate reads the
//! environment after construction.

use crate::{Error, Result};

/// Environment variable holding the completion service API key.
pub const ENV_COMPLETION_API_KEY: &str = "OPENAI_KEY";
/// Environment variable holding the page database API key.
pub const ENV_PAGE_STORE_API_KEY: &str = "NOTION_API_KEY";
/// Environment variable holding the database id for type pages.
pub const ENV_TYPES_DATABASE_ID: &str = "TYPES_DATABASE_ID";
/// Environment variable holding the database id for link pages.
pub const ENV_LINKS_DATABASE_ID: &str = "LINKS_DATABASE_ID";

/// Default completion service endpoint.
pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.openai.com";
/// Default page database endpoint.
pub const DEFAULT_PAGE_STORE_ENDPOINT: &str = "https://api.notion.com";

/// Resolved configuration for both external collaborators.
///
/// Construct with [`Config::from_env`] in the CLI, or build the struct
/// directly in tests with mock endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the completion service.
    pub completion_api_key: String,
    /// API key for the page database.
    pub page_store_api_key: String,
    /// Database id receiving type pages.
    pub types_database_id: String,
    /// Database id receiving link pages.
    pub links_database_id: String,
    /// Base URL of the completion service.
    pub completion_endpoint: String,
    /// Base URL of the page database.
    pub page_store_endpoint: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first missing variable. Validity
    /// of the values themselves is left to the services; a bad key surfaces
    /// on first use, not at startup.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// Exists so tests can drive configuration without mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("{key} is not set in the environment")))
        };

        Ok(Self {
            completion_api_key: require(ENV_COMPLETION_API_KEY)?,
            page_store_api_key: require(ENV_PAGE_STORE_API_KEY)?,
            types_database_id: require(ENV_TYPES_DATABASE_ID)?,
            links_database_id: require(ENV_LINKS_DATABASE_ID)?,
            completion_endpoint: DEFAULT_COMPLETION_ENDPOINT.to_string(),
            page_store_endpoint: DEFAULT_PAGE_STORE_ENDPOINT.to_string(),
        })
    }

    /// Override the completion service endpoint (primarily for tests).
    #[must_use]
    pub fn with_completion_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.completion_endpoint = endpoint.into();
        self
    }

    /// Override the page database endpoint (primarily for tests).
    #[must_use]
    pub fn with_page_store_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.page_store_endpoint = endpoint.into();
        self
    }
}
