// src/registry/merge.rs
// =============================================================================
// This module combines many ContentSources into one Registry.
//
// Merge order:
// - Sources are merged in the order of the slice we are given
// - Entries inside a source are merged in the order they were declared
//
// Collisions (two entries with the same slug) follow a CollisionPolicy:
// - Override: the entry merged last wins, and we log a warning
// - Reject: the merge stops with RegistryError::DuplicateSlug
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display for our error enum
// - HashMap: Remembers which source declared each slug, for messages
// - Result<T, E>: Reject mode can fail, Override mode never does
// =============================================================================

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use super::{ContentSource, Registry};

// What to do when a slug is declared more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Later entries replace earlier ones (last write wins)
    #[default]
    Override,
    /// Any duplicate slug is an error
    Reject,
}

// Errors that can happen while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("slug '{slug}' is declared by both '{first}' and '{second}'")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

// Merges every source into a single Registry
//
// Parameters:
//   sources: the topic groups, in merge order
//   policy: how to treat a slug that appears twice
//
// Returns: the merged Registry, or DuplicateSlug under CollisionPolicy::Reject
//
// Example:
//   [{"topic-a": A}, {"topic-a": A2, "topic-b": B}] with Override
//   -> {"topic-a": A2, "topic-b": B}
pub fn merge_all(sources: &[ContentSource], policy: CollisionPolicy) -> Result<Registry, RegistryError> {
    let mut registry = Registry::default();

    // slug -> name of the source that currently owns it
    let mut owners: HashMap<&'static str, &'static str> = HashMap::new();

    for source in sources {
        debug!(source = source.name, entries = source.entries.len(), "merging content source");

        for entry in source.iter() {
            if let Some(&previous) = owners.get(entry.slug) {
                if policy == CollisionPolicy::Reject {
                    return Err(RegistryError::DuplicateSlug {
                        slug: entry.slug.to_string(),
                        first: previous.to_string(),
                        second: source.name.to_string(),
                    });
                }
                warn!(
                    slug = entry.slug,
                    replaced = previous,
                    by = source.name,
                    "duplicate slug, keeping the later definition"
                );
            }

            owners.insert(entry.slug, source.name);
            registry.insert(entry);
        }
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: ContentSource = ContentSource::new(
        "first",
        &[("topic-a", "<h1>A</h1>"), ("shared", "<p>from first</p>")],
    );
    const SECOND: ContentSource = ContentSource::new(
        "second",
        &[("shared", "<p>from second</p>"), ("topic-b", "<h1>B</h1>")],
    );

    #[test]
    fn test_merge_disjoint_sources() {
        let a = ContentSource::new("a", &[("topic-a", "<h1>A</h1>")]);
        let b = ContentSource::new("b", &[("topic-b", "<h1>B</h1>")]);

        let registry = merge_all(&[a, b], CollisionPolicy::Reject).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("topic-a"), Some("<h1>A</h1>"));
        assert_eq!(registry.lookup("topic-b"), Some("<h1>B</h1>"));
    }

    #[test]
    fn test_override_keeps_last_source() {
        let registry = merge_all(&[FIRST, SECOND], CollisionPolicy::Override).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup("shared"), Some("<p>from second</p>"));

        // Flipping the order flips the winner
        let registry = merge_all(&[SECOND, FIRST], CollisionPolicy::Override).unwrap();
        assert_eq!(registry.lookup("shared"), Some("<p>from first</p>"));
    }

    #[test]
    fn test_override_within_one_source() {
        let source = ContentSource::new("dup", &[("x", "<p>old</p>"), ("x", "<p>new</p>")]);
        let registry = merge_all(&[source], CollisionPolicy::Override).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("x"), Some("<p>new</p>"));
    }

    #[test]
    fn test_reject_reports_both_sources() {
        let err = merge_all(&[FIRST, SECOND], CollisionPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateSlug {
                slug: "shared".to_string(),
                first: "first".to_string(),
                second: "second".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "slug 'shared' is declared by both 'first' and 'second'"
        );
    }

    #[test]
    fn test_empty_input_gives_empty_registry() {
        let registry = merge_all(&[], CollisionPolicy::Reject).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_policy_is_override() {
        assert_eq!(CollisionPolicy::default(), CollisionPolicy::Override);
    }
}
