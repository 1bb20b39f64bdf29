// src/registry/mod.rs
// =============================================================================
// This module holds the content registry: a flat mapping from topic slug to
// the HTML authored for that topic.
//
// Submodules:
// - source: The types for one group of authored entries (ContentSource)
// - merge: Combines many sources into one Registry with a collision policy
// - loader: Builds the registry from every topic module bundled in the binary
//
// The registry is built once at startup and never mutated afterwards.
// Everything it stores is &'static str, so it can be shared freely.
//
// Rust concepts:
// - BTreeMap: A sorted map, so listing slugs is always deterministic
// - Lifetimes: &'static str means "borrowed for the whole program"
// - Option<T>: Used as the "not found" answer from lookup()
// =============================================================================

mod loader;
mod merge;
mod source;

pub use loader::build_registry;
pub use merge::{merge_all, CollisionPolicy, RegistryError};
pub use source::{ContentEntry, ContentSource};

use std::collections::BTreeMap;

// The aggregated slug -> HTML mapping
//
// Built by merge_all() (or build_registry(), which calls it with the
// bundled sources). There is no way to insert into a Registry from outside
// this module, so once you hold one it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<&'static str, &'static str>,
}

impl Registry {
    /// Returns the HTML authored for `slug`, or None if no topic has it.
    ///
    /// The string is returned exactly as written in the topic module.
    pub fn lookup(&self, slug: &str) -> Option<&'static str> {
        self.entries.get(slug).copied()
    }

    /// Like lookup(), but also hands back the stored slug.
    pub fn entry(&self, slug: &str) -> Option<ContentEntry> {
        self.entries
            .get_key_value(slug)
            .map(|(&slug, &html)| ContentEntry::new(slug, html))
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All slugs, sorted ascending.
    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// All (slug, html) pairs, sorted by slug.
    pub fn iter(&self) -> impl Iterator<Item = ContentEntry> + '_ {
        self.entries
            .iter()
            .map(|(&slug, &html)| ContentEntry::new(slug, html))
    }

    // Inserts an entry and hands back whatever was there before.
    // Only merge.rs calls this, while building.
    fn insert(&mut self, entry: ContentEntry) -> Option<&'static str> {
        self.entries.insert(entry.slug, entry.html)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BTreeMap instead of HashMap?
//    - HashMap iterates in a random order that changes between runs
//    - BTreeMap keeps keys sorted, so `list` prints the same thing every time
//    - Lookups are O(log n) instead of O(1), which is nothing for a few
//      dozen topics
//
// 2. Why is insert() private?
//    - The registry should never change after it is built
//    - Making the only mutating method private to this module enforces that
//      at compile time, with no runtime checks needed
//
// 3. What does .copied() do?
//    - get() returns Option<&&'static str> (a reference to our stored value)
//    - .copied() turns that into Option<&'static str>
//    - &str is Copy, so this is free
// -----------------------------------------------------------------------------
