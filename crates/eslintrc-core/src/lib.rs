//! # eslintrc-core
//!
//! Typed model of ESLint configuration documents.
//!
//! An ESLint config is declarative data: a parser reference, plugin and
//! extends lists, resolver settings, and a rule-name → setting map. This
//! crate models that shape exactly, including the engine's quirks:
//!
//! - [`RulesMap`] keeps JS-object semantics — re-assigning a key silently
//!   replaces the value (last write wins), never an error
//! - [`Severity`] accepts both the string forms (`"off"`, `"warn"`,
//!   `"error"`) and the legacy numeric forms (`0`, `1`, `2`)
//! - [`merge`] reproduces the engine's config-merge contract
//!
//! ## Example
//!
//! ```
//! use eslintrc_core::{ConfigDocument, RuleEntry};
//!
//! let doc = ConfigDocument::builder()
//!     .root(true)
//!     .parser("@typescript-eslint/parser")
//!     .plugin("import")
//!     .rule("camelcase", RuleEntry::off())
//!     .build();
//!
//! assert!(doc.rules().get("camelcase").is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod diff;
mod document;
mod merge;
mod overrides;
mod rules;

pub use diff::{diff, Drift};
pub use document::{ConfigDocument, DocumentBuilder, DocumentError, ValidationError};
pub use merge::merge;
pub use overrides::{OverrideError, Overrides};
pub use rules::{ParseSeverityError, RuleEntry, RulesMap, Severity};
