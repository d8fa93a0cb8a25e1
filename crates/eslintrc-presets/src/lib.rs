//! # eslintrc-presets
//!
//! Shared lint configuration presets, expressed as
//! [`ConfigDocument`](eslintrc_core::ConfigDocument) values:
//!
//! - [`base`] — server-side / general TypeScript code, no UI-framework
//!   assumptions
//! - [`react`] — the same conventions plus React component rules (hooks,
//!   JSX, component definition style)
//!
//! Both documents are static data; an external lint engine loads exactly
//! one of them and merges it with its own extends chain.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod base;
mod react;
mod shared;

pub use base::base;
pub use react::react;

use eslintrc_core::ConfigDocument;

/// The shipped presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Server-side / general TypeScript conventions.
    Base,
    /// Base conventions plus React component rules.
    React,
}

impl Preset {
    /// All shipped presets, in listing order.
    pub const ALL: [Self; 2] = [Self::Base, Self::React];

    /// Builds the preset's configuration document.
    #[must_use]
    pub fn document(self) -> ConfigDocument {
        match self {
            Self::Base => base(),
            Self::React => react(),
        }
    }

    /// Short preset name, as used on the CLI.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::React => "react",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Base => "server-side / general TypeScript code",
            Self::React => "TypeScript + React client code",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_build_and_validate() {
        for preset in Preset::ALL {
            let doc = preset.document();
            assert!(doc.validate().is_ok(), "{} failed validation", preset.name());
            assert!(!doc.rules().is_empty());
        }
    }

    #[test]
    fn preset_names_are_distinct() {
        assert_ne!(Preset::Base.name(), Preset::React.name());
    }
}
