//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Output format for rendered conversation labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "Unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Log line format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Config(format!(
                "Unknown log format '{}' (expected 'pretty' or 'json')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Viewer to resolve names for when none is given on the command line
    pub viewer_id: Option<String>,

    /// Raw output format, parsed only when no explicit format is given
    pub output_format: Option<String>,

    /// Runtime configuration
    pub log_format: LogFormat,
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    #[mutants::skip] // Reads process environment; covered through from_lookup
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            viewer_id: lookup("CAMPUS_VIEWER_ID").filter(|v| !v.is_empty()),

            output_format: lookup("CAMPUS_OUTPUT_FORMAT").filter(|v| !v.is_empty()),
            log_format: lookup("LOG_FORMAT")
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or_default(),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "campus=info".to_string()),
        };

        Ok(config)
    }

    /// Configured output format, `Text` when unset
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output_format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}
