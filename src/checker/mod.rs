// src/checker/mod.rs
// =============================================================================
// This module contains the tooling that reads the authored HTML.
//
// Submodules:
// - html: Pulls titles and links out of a page (read-only, never rewrites)
// - http: Checks those links over HTTP, concurrently
//
// Nothing here changes the content. The registry hands out the HTML
// exactly as authored; the checker only parses a copy of the view.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;
mod http;

// Re-export public items from submodules
// This lets callers write `checker::check_links()` instead of
// `checker::http::check_links()`
pub use html::{extract_html_links, page_title};
pub use http::{check_links, LinkCheckResult, LinkStatus, LinkTarget};
