//! Application configuration loading from environment variables.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binaries). History size and sampling cadence are fixed
//! constants, not settings.
//!
//! # Environment Variables
//!
//! ## Dashboard
//! - `RUST_LOG`: Logging level (default: "info,dashboard=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 5000)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins (default: none)
//!
//! ## Registry provisioner
//! - `AWS_REGION`: Region to create the repository in (default: "ap-south-1")
//! - `REGISTRY_REPOSITORY_NAME`: Repository to create (default: "host-metrics-dashboard")

use serde::Deserialize;

pub const DEFAULT_REGISTRY_REGION: &str = "ap-south-1";
pub const DEFAULT_REPOSITORY_NAME: &str = "host-metrics-dashboard";

/// Dashboard server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Origins allowed to call the JSON endpoints cross-origin. Empty means
    /// any origin in debug builds and none in release builds.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 5000)?,
            allowed_origins: parse_list(&env_or("ALLOWED_ORIGINS", String::new())?),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the one-shot registry provisioner.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    pub region: String,
    pub repository_name: String,
}

impl RegistryConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            region: env_or("AWS_REGION", DEFAULT_REGISTRY_REGION.to_string())?,
            repository_name: env_or(
                "REGISTRY_REPOSITORY_NAME",
                DEFAULT_REPOSITORY_NAME.to_string(),
            )?,
        })
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
