// src/content/mod.rs
// =============================================================================
// The authored course content.
//
// Each submodule is one topic group and holds its pages as HTML string
// constants. A group exposes a single `SOURCE` constant that lists its
// (slug, html) pairs. Groups never reference each other.
//
// To add a page: write a new constant in the right group and add its slug
// to that group's SOURCE list. To add a group: create the file, declare it
// below and append it to all_sources().
// =============================================================================

mod modules;
mod sql;
mod theming;

use crate::registry::ContentSource;

// Every bundled topic group, in merge order
//
// Order matters only when two groups declare the same slug: the later one
// wins (or the build fails with --strict).
pub fn all_sources() -> Vec<ContentSource> {
    vec![sql::SOURCE, modules::SOURCE, theming::SOURCE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_group_has_content() {
        for source in all_sources() {
            assert!(!source.entries.is_empty(), "group '{}' is empty", source.name);
        }
    }

    #[test]
    fn test_slugs_are_kebab_case() {
        for source in all_sources() {
            for slug in source.slugs() {
                assert!(!slug.is_empty());
                assert!(
                    slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                    "slug '{}' in '{}' is not kebab-case",
                    slug,
                    source.name
                );
            }
        }
    }

    #[test]
    fn test_every_page_has_a_heading() {
        for source in all_sources() {
            for entry in source.iter() {
                assert!(entry.html.contains("<h1>"), "'{}' has no <h1>", entry.slug);
            }
        }
    }
}
