// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line options and the resolved runtime configuration.

use anyhow::{Context, Result};
use clap::Parser;
use url::Url;

/// Origin of the contacts API when none is given.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Parser)]
#[command(name = "mycontacts", version, about = "Desktop client for the MyContacts API")]
pub struct Cli {
    /// Base URL of the contacts API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// Settings injected into the services at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: Url,
}

impl AppConfig {
    /// Validate CLI input into a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the API URL does not parse or is not http(s).
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base_url = Url::parse(&cli.api_url)
            .with_context(|| format!("Invalid API URL: {}", cli.api_url))?;
        if !matches!(api_base_url.scheme(), "http" | "https") {
            anyhow::bail!("API URL must use http or https: {}", cli.api_url);
        }
        Ok(Self { api_base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_api() {
        let cli = Cli::parse_from(["mycontacts"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:3001/");
    }

    #[test]
    fn accepts_custom_api_url() {
        let cli = Cli::parse_from(["mycontacts", "--api-url", "https://contacts.example.org/api"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_base_url.host_str(), Some("contacts.example.org"));
    }

    #[test]
    fn rejects_non_http_urls() {
        for raw in ["not a url", "ftp://example.org"] {
            let cli = Cli::parse_from(["mycontacts", "--api-url", raw]);
            assert!(AppConfig::from_cli(&cli).is_err(), "{raw} should be rejected");
        }
    }
}
