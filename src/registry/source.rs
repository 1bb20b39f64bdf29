// src/registry/source.rs
// =============================================================================
// Types describing authored content before it is merged.
//
// Each topic module (src/content/*.rs) exposes one ContentSource: a name for
// the group plus a list of (slug, html) pairs. Both are &'static because the
// HTML lives in the binary as string constants.
// =============================================================================

// One topic's HTML block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentEntry {
    /// Lookup key, e.g. "coercion-tipos"
    pub slug: &'static str,
    /// The authored markup, never transformed
    pub html: &'static str,
}

impl ContentEntry {
    pub const fn new(slug: &'static str, html: &'static str) -> Self {
        ContentEntry { slug, html }
    }
}

// A named group of entries (one per topic module)
//
// The name only shows up in logs and errors, so authors can tell which
// module declared a duplicated slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSource {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

impl ContentSource {
    // const fn so topic modules can declare their source as a `pub const`
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        ContentSource { name, entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = ContentEntry> + '_ {
        self.entries
            .iter()
            .map(|&(slug, html)| ContentEntry::new(slug, html))
    }

    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(slug, _)| slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: ContentSource = ContentSource::new(
        "sample",
        &[("one", "<p>1</p>"), ("two", "<p>2</p>")],
    );

    #[test]
    fn test_iter_keeps_declaration_order() {
        let slugs: Vec<_> = SAMPLE.slugs().collect();
        assert_eq!(slugs, vec!["one", "two"]);
    }

    #[test]
    fn test_iter_builds_entries() {
        let first = SAMPLE.iter().next().unwrap();
        assert_eq!(first.slug, "one");
        assert_eq!(first.html, "<p>1</p>");
    }
}
