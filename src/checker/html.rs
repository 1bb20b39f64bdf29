// src/checker/html.rs
// =============================================================================
// This module reads the authored HTML fragments.
//
// We use the `scraper` crate which:
// - Parses HTML (including fragments) into a DOM
// - Supports CSS selectors for finding elements
//
// We also use the `url` crate to resolve relative links such as
// "/curso/sql-joins" against the site's base URL.
//
// Rust concepts:
// - Option<T>: A page might have no heading, a link might be unusable
// - Iterators: For walking the selected elements
// - Closures: Anonymous functions (|x| ...)
// =============================================================================

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

// Returns the display title of a page
//
// The title is the text of the first <h1>, or of the first <h2> when the
// page has no <h1>. Runs of whitespace are collapsed to single spaces.
//
// Example:
//   "<article><h1>Uniones  entre\n tablas</h1></article>"
//   -> Some("Uniones entre tablas")
pub fn page_title(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);

    for tag in ["h1", "h2"] {
        // Selector::parse only fails on invalid CSS; these are fixed tag names
        let selector = Selector::parse(tag).ok()?;

        if let Some(heading) = fragment.select(&selector).next() {
            let text = heading.text().collect::<Vec<_>>().join(" ");
            let title = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !title.is_empty() {
                return Some(title);
            }
        }
    }

    None
}

// Extracts every followable link from an HTML fragment
//
// Parameters:
//   html: the authored HTML
//   base_url: the public site URL, for resolving relative links
//
// Returns: absolute http/https URLs, in document order
//
// Example:
//   html = "<a href='/curso/sql-joins'>Joins</a>"
//   base_url = "https://www.example.com/"
//   result = ["https://www.example.com/curso/sql-joins"]
pub fn extract_html_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the base URL once
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            warn!(base_url, error = %e, "invalid base URL, skipping link extraction");
            return links;
        }
    };

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return links,
    };

    let fragment = Html::parse_fragment(html);

    for element in fragment.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute_url) = resolve_link(&base, href) {
                links.push(absolute_url);
            }
        }
    }

    links
}

// Resolves a link (possibly relative) to an absolute http/https URL
//
// We skip:
// - #anchors (same page)
// - mailto:, tel:, javascript: links
// - anything that doesn't end up as http or https (ftp:, data:, ...)
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // join() handles both cases: absolute hrefs replace the base,
    // relative ones are resolved against it
    let url = base.join(href).ok()?;

    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. parse_fragment vs parse_document
//    - Our content is a piece of a page (an <article>), not a full document
//    - parse_fragment doesn't invent <html>/<head>/<body> around it
//    - Selectors work the same way on both
//
// 2. Why .ok()? on Selector::parse?
//    - Selector::parse returns a Result
//    - Our selectors are constants, so it never fails in practice
//    - .ok()? turns a failure into None instead of panicking
//
// 3. What does heading.text() return?
//    - An iterator over every text node inside the element
//    - "<h1>Hola <em>mundo</em></h1>" yields "Hola " and "mundo"
// -----------------------------------------------------------------------------
