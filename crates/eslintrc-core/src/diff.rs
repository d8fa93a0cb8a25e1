//! Structural comparison of configuration documents.
//!
//! Used to detect drift between a project's checked-in config and the
//! preset it was generated from.

use crate::document::ConfigDocument;
use crate::rules::RuleEntry;
use serde_json::Value;
use std::fmt;

/// A single difference between an expected and an actual document.
#[derive(Debug, Clone, PartialEq)]
pub enum Drift {
    /// A top-level field differs.
    Field {
        /// Field name (`root`, `parser`, `plugins`, `extends`, `settings`).
        field: &'static str,
        /// Expected value, JSON-rendered.
        expected: String,
        /// Actual value, JSON-rendered.
        actual: String,
    },
    /// A rule the preset declares is missing.
    MissingRule {
        /// The missing rule name.
        name: String,
    },
    /// A rule not present in the preset.
    ExtraRule {
        /// The unexpected rule name.
        name: String,
    },
    /// A rule is declared with a different setting.
    RuleMismatch {
        /// The rule name.
        name: String,
        /// The preset's setting.
        expected: RuleEntry,
        /// The document's setting.
        actual: RuleEntry,
    },
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field {
                field,
                expected,
                actual,
            } => write!(f, "{field}: expected {expected}, found {actual}"),
            Self::MissingRule { name } => write!(f, "rule `{name}` is missing"),
            Self::ExtraRule { name } => write!(f, "rule `{name}` is not in the preset"),
            Self::RuleMismatch {
                name,
                expected,
                actual,
            } => write!(f, "rule `{name}`: expected {expected}, found {actual}"),
        }
    }
}

/// Compares two documents, returning every difference found.
///
/// Rule order is not significant — only the resolved key → setting mapping
/// is compared, since the engine resolves duplicates before applying rules.
#[must_use]
pub fn diff(expected: &ConfigDocument, actual: &ConfigDocument) -> Vec<Drift> {
    let mut findings = Vec::new();

    if expected.root() != actual.root() {
        findings.push(Drift::Field {
            field: "root",
            expected: expected.root().to_string(),
            actual: actual.root().to_string(),
        });
    }
    if expected.parser() != actual.parser() {
        findings.push(Drift::Field {
            field: "parser",
            expected: render_str(expected.parser()),
            actual: render_str(actual.parser()),
        });
    }
    if expected.plugins() != actual.plugins() {
        findings.push(Drift::Field {
            field: "plugins",
            expected: render_list(expected.plugins()),
            actual: render_list(actual.plugins()),
        });
    }
    if expected.extends() != actual.extends() {
        findings.push(Drift::Field {
            field: "extends",
            expected: render_list(expected.extends()),
            actual: render_list(actual.extends()),
        });
    }
    if expected.settings() != actual.settings() {
        findings.push(Drift::Field {
            field: "settings",
            expected: Value::Object(expected.settings().clone()).to_string(),
            actual: Value::Object(actual.settings().clone()).to_string(),
        });
    }

    for (name, entry) in expected.rules().iter() {
        match actual.rules().get(name) {
            None => findings.push(Drift::MissingRule {
                name: name.to_string(),
            }),
            Some(found) if found != entry => findings.push(Drift::RuleMismatch {
                name: name.to_string(),
                expected: entry.clone(),
                actual: found.clone(),
            }),
            Some(_) => {}
        }
    }
    for (name, _) in actual.rules().iter() {
        if !expected.rules().contains(name) {
            findings.push(Drift::ExtraRule {
                name: name.to_string(),
            });
        }
    }

    findings
}

fn render_str(value: Option<&str>) -> String {
    value.map_or_else(|| "(none)".to_string(), |v| format!("\"{v}\""))
}

fn render_list(values: &[String]) -> String {
    format!("[{}]", values.join(", "))
}
