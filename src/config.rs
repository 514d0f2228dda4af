// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for the users API.
//!
//! Values come from the environment (optionally seeded from a `.env` file)
//! using the `USERS_API_` prefix:
//!
//! - `USERS_API_BIND_ADDR`: Server bind address (default: 0.0.0.0:4000)
//! - `USERS_API_ALLOWED_ORIGINS`: Comma-separated CORS origins
//!   (default: http://localhost:4000)
//! - `USERS_API_GRAPHIQL`: Serve the GraphiQL page (default: true)
//! - `USERS_API_LOG_JSON`: Emit JSON logs (default: false)

use http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const ENV_PREFIX: &str = "USERS_API";

/// Configuration for the users API service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Comma-separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Serve the GraphiQL IDE on `GET /graphql` and `GET /graphiql`
    #[serde(default = "default_true")]
    pub graphiql: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:4000".to_string()
}

fn default_allowed_origins() -> String {
    "http://localhost:4000".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origins: default_allowed_origins(),
            graphiql: default_true(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Self::from_settings(settings)
    }

    /// Deserialize from an already assembled settings tree.
    pub fn from_settings(settings: config::Config) -> Result<Self> {
        Ok(settings.try_deserialize()?)
    }

    /// Parsed CORS origins; entries that are not valid header values are skipped.
    pub fn origins(&self) -> Vec<HeaderValue> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|o| o.parse().ok())
            .collect()
    }
}
