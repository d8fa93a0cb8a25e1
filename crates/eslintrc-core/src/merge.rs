//! The engine's config-merge contract.
//!
//! When a local config sits on top of a shared one, the engine merges them
//! deterministically: plugins are unioned, extends chains concatenated and
//! deduplicated, settings shallow-merged, and rules applied with
//! later-wins-by-key across the whole chain.

use crate::document::ConfigDocument;

/// Merges `overlay` on top of `base`, reproducing the engine's semantics.
///
/// - `root`: true if either document sets it
/// - `parser`: the overlay's parser when present, otherwise the base's
/// - `plugins`: order-preserving union (base first)
/// - `extends`: concatenated base-then-overlay, deduplicated on first sight
/// - `settings`: shallow merge, overlay wins per key
/// - `rules`: base entries first, overlay entries overwrite by key
#[must_use]
pub fn merge(base: &ConfigDocument, overlay: &ConfigDocument) -> ConfigDocument {
    let mut merged = base.clone();

    merged.root = base.root || overlay.root;
    if overlay.parser.is_some() {
        merged.parser.clone_from(&overlay.parser);
    }

    for plugin in &overlay.plugins {
        if !merged.plugins.contains(plugin) {
            merged.plugins.push(plugin.clone());
        }
    }

    for entry in &overlay.extends {
        if !merged.extends.contains(entry) {
            merged.extends.push(entry.clone());
        }
    }

    for (key, value) in &overlay.settings {
        merged.settings.insert(key.clone(), value.clone());
    }

    for (name, entry) in overlay.rules.iter() {
        merged.rules.insert(name, entry.clone());
    }

    merged
}
