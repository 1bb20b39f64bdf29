// src/config.rs
// =============================================================================
// Runtime settings, collected from command-line flags and environment
// variables (clap reads both, see cli.rs) and validated once at startup.
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, Result};
use url::Url;

use crate::cli::Cli;
use crate::registry::CollisionPolicy;

pub const DEFAULT_BASE_URL: &str = "https://www.example.com/";
pub const DEFAULT_CONCURRENCY: usize = 16;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// What to do when two topics share a slug
    pub policy: CollisionPolicy,
    /// Public site URL that relative links in the content resolve against
    pub base_url: String,
    /// Maximum link checks in flight
    pub concurrency: usize,
    /// Per-request timeout for link checks
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            policy: CollisionPolicy::Override,
            base_url: DEFAULT_BASE_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    // Builds and validates the config from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Config> {
        let base = Url::parse(&cli.base_url)
            .map_err(|e| anyhow!("Invalid base URL '{}': {}", cli.base_url, e))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(anyhow!("Base URL must be http or https: {}", cli.base_url));
        }
        if cli.concurrency == 0 {
            return Err(anyhow!("--concurrency must be at least 1"));
        }
        if cli.timeout_secs == 0 {
            return Err(anyhow!("--timeout-secs must be at least 1"));
        }

        let policy = if cli.strict {
            CollisionPolicy::Reject
        } else {
            CollisionPolicy::Override
        };

        Ok(Config {
            policy,
            base_url: base.to_string(),
            concurrency: cli.concurrency,
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["content-registry"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_cli(&parse(&["list"])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_strict_selects_reject() {
        let config = Config::from_cli(&parse(&["--strict", "list"])).unwrap();
        assert_eq!(config.policy, CollisionPolicy::Reject);
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = Config::from_cli(&parse(&["--base-url", "https://curso.example.org", "list"])).unwrap();
        assert_eq!(config.base_url, "https://curso.example.org/");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_cli(&parse(&["--base-url", "nope", "list"])).is_err());
        assert!(Config::from_cli(&parse(&["--base-url", "ftp://example.com/", "list"])).is_err());
        assert!(Config::from_cli(&parse(&["--concurrency", "0", "audit"])).is_err());
        assert!(Config::from_cli(&parse(&["--timeout-secs", "0", "audit"])).is_err());
    }

    #[test]
    fn test_audit_settings() {
        let config = Config::from_cli(&parse(&["audit", "--concurrency", "4", "--timeout-secs", "3"])).unwrap();
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
