// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, written to stderr)
// 2. Parse command-line arguments and build the Config
// 3. Build the content registry once, from the bundled topic modules
// 4. Dispatch to the subcommand handler
// 5. Exit with proper code (0 = success, 1 = not found / broken links, 2 = error)
//
// The registry is created here and passed down by reference. Nothing
// mutates it after build_registry() returns.
// =============================================================================

mod checker; // src/checker/ - reads titles and links, checks links
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated runtime settings
mod content; // src/content/ - the authored HTML, one module per topic group
mod registry; // src/registry/ - slug -> HTML mapping and the loader

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use registry::{build_registry, Registry};

// One row of `list` output
#[derive(Debug, Serialize)]
struct TopicSummary {
    slug: &'static str,
    title: Option<String>,
    bytes: usize,
}

// One row of `links` output
#[derive(Debug, Serialize)]
struct TopicLink {
    slug: &'static str,
    url: String,
}

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout stays clean for HTML and JSON.
// RUST_LOG overrides the default level (warn).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = success
//   Ok(1) = slug not found, or broken links found
//   Err = unexpected error (main turns it into exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let registry = build_registry(config.policy)?;

    match cli.command {
        Commands::List { json } => handle_list(&registry, json),
        Commands::Show { slug } => handle_show(&registry, &slug),
        Commands::Links { slug, json } => handle_links(&registry, slug.as_deref(), &config, json),
        Commands::Audit { json } => handle_audit(&registry, &config, json).await,
    }
}

// Handles the 'list' subcommand
fn handle_list(registry: &Registry, json: bool) -> Result<i32> {
    let topics: Vec<TopicSummary> = registry
        .iter()
        .map(|entry| TopicSummary {
            slug: entry.slug,
            title: checker::page_title(entry.html),
            bytes: entry.html.len(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&topics)?);
        return Ok(0);
    }

    println!("{:<28} {:>8}  {}", "SLUG", "BYTES", "TITLE");
    println!("{}", "=".repeat(80));
    for topic in &topics {
        println!(
            "{:<28} {:>8}  {}",
            topic.slug,
            topic.bytes,
            topic.title.as_deref().unwrap_or("(untitled)")
        );
    }
    println!();
    println!("📚 {} topic(s)", topics.len());

    Ok(0)
}

// Handles the 'show' subcommand
//
// Writes the HTML byte-for-byte, no trailing newline added.
fn handle_show(registry: &Registry, slug: &str) -> Result<i32> {
    let Some(html) = registry.lookup(slug) else {
        eprintln!("❌ Unknown topic: {}", slug);
        eprintln!("   Available: {}", registry.slugs().collect::<Vec<_>>().join(", "));
        return Ok(1);
    };

    // process::exit() skips destructors, so flush stdout ourselves
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;

    Ok(0)
}

// Handles the 'links' subcommand
fn handle_links(registry: &Registry, slug: Option<&str>, config: &Config, json: bool) -> Result<i32> {
    let entries: Vec<_> = match slug {
        Some(slug) if !registry.contains(slug) => {
            eprintln!("❌ Unknown topic: {}", slug);
            return Ok(1);
        }
        Some(slug) => registry.entry(slug).into_iter().collect(),
        None => registry.iter().collect(),
    };

    let links: Vec<TopicLink> = entries
        .iter()
        .flat_map(|entry| {
            checker::extract_html_links(entry.html, &config.base_url)
                .into_iter()
                .map(move |url| TopicLink { slug: entry.slug, url })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(0);
    }

    println!("{:<28} {}", "SLUG", "URL");
    println!("{}", "=".repeat(80));
    for link in &links {
        println!("{:<28} {}", link.slug, link.url);
    }
    println!();
    println!("🔗 {} link(s) in {} topic(s)", links.len(), entries.len());

    Ok(0)
}

// Handles the 'audit' subcommand
async fn handle_audit(registry: &Registry, config: &Config, json: bool) -> Result<i32> {
    // url -> slugs that link to it; checking each URL once
    let mut targets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in registry.iter() {
        for url in checker::extract_html_links(entry.html, &config.base_url) {
            let found_in = targets.entry(url).or_default();
            if !found_in.iter().any(|s| s == entry.slug) {
                found_in.push(entry.slug.to_string());
            }
        }
    }

    if targets.is_empty() {
        if json {
            println!("[]");
        } else {
            println!("✅ No links found to check");
        }
        return Ok(0);
    }

    info!(
        links = targets.len(),
        concurrency = config.concurrency,
        "checking links"
    );

    let targets = targets
        .into_iter()
        .map(|(url, found_in)| checker::LinkTarget { url, found_in })
        .collect();

    let results = checker::check_links(targets, config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }

    let broken_count = results.iter().filter(|r| !r.is_ok()).count();

    if broken_count > 0 {
        Ok(1) // Exit code 1 = broken links found
    } else {
        Ok(0)
    }
}

// Prints audit results as a human-readable table
fn print_table(results: &[checker::LinkCheckResult]) {
    println!("{:<60} {:<15} {:<30}", "URL", "STATUS", "MESSAGE");
    println!("{}", "=".repeat(105));

    for result in results {
        let status_display = format_status(&result.status);
        let message = result.message.as_deref().unwrap_or("");

        // Truncate long URLs on a char boundary
        let url_display = if result.url.chars().count() > 57 {
            let short: String = result.url.chars().take(57).collect();
            format!("{}...", short)
        } else {
            result.url.clone()
        };

        println!("{:<60} {:<15} {:<30}", url_display, status_display, message);

        if !result.is_ok() {
            println!("    ↳ found in: {}", result.found_in.join(", "));
        }
    }

    println!();

    let ok_count = results.iter().filter(|r| r.is_ok()).count();
    let broken_count = results.len() - ok_count;

    println!("📊 Summary:");
    println!("   ✅ OK: {}", ok_count);
    println!("   ❌ Broken: {}", broken_count);
    println!("   📋 Total: {}", results.len());
}

fn format_status(status: &checker::LinkStatus) -> String {
    match status {
        checker::LinkStatus::Ok => "✅ OK".to_string(),
        checker::LinkStatus::Redirect(_) => "🔀 REDIRECT".to_string(),
        checker::LinkStatus::Broken => "❌ BROKEN".to_string(),
        checker::LinkStatus::Timeout => "⏱️  TIMEOUT".to_string(),
        checker::LinkStatus::SslError => "🔒 SSL ERROR".to_string(),
        checker::LinkStatus::TooManyRedirects => "🔁 TOO MANY REDIRECTS".to_string(),
        checker::LinkStatus::DnsError => "🌐 DNS ERROR".to_string(),
        checker::LinkStatus::Error => "⚠️  ERROR".to_string(),
    }
}
