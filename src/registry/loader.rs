// src/registry/loader.rs
// =============================================================================
// Builds the registry from every topic module compiled into the binary.
//
// The list of sources comes from content::all_sources(), which fixes the
// merge order. Calling build_registry() twice gives two equal registries:
// there is no I/O and no hidden state.
// =============================================================================

use tracing::{info, warn};

use super::{merge_all, CollisionPolicy, Registry, RegistryError};
use crate::content;

// Builds the full content registry
//
// With CollisionPolicy::Override this never fails.
pub fn build_registry(policy: CollisionPolicy) -> Result<Registry, RegistryError> {
    let sources = content::all_sources();
    let registry = merge_all(&sources, policy)?;

    if registry.is_empty() {
        warn!("no content bundled, registry is empty");
    }

    info!(
        sources = sources.len(),
        topics = registry.len(),
        "content registry built"
    );

    Ok(registry)
}
