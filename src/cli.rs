// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is plain Rust structs and enums
// with #[...] attributes. Global options also read environment variables,
// so CI can configure them without changing the command line.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "content-registry",
    version,
    about = "Browse and audit the PrestaShop course content registry",
    long_about = "content-registry loads every bundled course page into one slug -> HTML registry. \
                  Use it to list topics, print a page, or check the links inside the content."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fail when two topics declare the same slug instead of keeping the last one
    #[arg(long, global = true)]
    pub strict: bool,

    /// Public site URL used to resolve relative links in the content
    #[arg(long, global = true, env = "CONTENT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum number of link checks running at the same time
    #[arg(long, global = true, env = "CONTENT_AUDIT_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Timeout for each link check, in seconds
    #[arg(long, global = true, env = "CONTENT_AUDIT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

// This enum defines our subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List every topic slug with its title
    ///
    /// Example: content-registry list --json
    List {
        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the HTML of one topic, exactly as authored
    ///
    /// Example: content-registry show coercion-tipos
    Show {
        /// Topic slug (see `list`)
        slug: String,
    },

    /// List the links found in one topic, or in all of them
    ///
    /// Example: content-registry links modulo-hooks
    Links {
        /// Topic slug; omit to scan every topic
        slug: Option<String>,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check every link in the content over HTTP
    ///
    /// Exits with code 1 when at least one link is broken.
    Audit {
        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["content-registry", "show", "sql-joins"]).unwrap();
        assert_eq!(cli.command, Commands::Show { slug: "sql-joins".to_string() });
        assert!(!cli.strict);
    }

    #[test]
    fn test_parse_links_without_slug() {
        let cli = Cli::try_parse_from(["content-registry", "links", "--json"]).unwrap();
        assert_eq!(cli.command, Commands::Links { slug: None, json: true });
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["content-registry", "list", "--strict", "--json"]).unwrap();
        assert!(cli.strict);
        assert_eq!(cli.command, Commands::List { json: true });
    }

    #[test]
    fn test_show_requires_slug() {
        assert!(Cli::try_parse_from(["content-registry", "show"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Cli::try_parse_from(["content-registry", "crawl"]).is_err());
    }
}
