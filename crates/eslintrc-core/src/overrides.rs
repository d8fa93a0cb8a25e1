//! Local override files.
//!
//! A project can keep a small TOML file next to its sources to tweak a
//! preset without forking it: extra plugins, extra extends entries, and
//! per-rule settings. Rule values use the engine's shapes — a severity
//! string or a `[severity, options...]` array.
//!
//! ```toml
//! extends = ["plugin:storybook/recommended"]
//!
//! [rules]
//! "no-console" = "warn"
//! "import/extensions" = ["error", "always", { js = "never" }]
//! ```

use crate::document::ConfigDocument;
use crate::rules::{RuleEntry, Severity};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use toml::Value as TomlValue;

/// Local tweaks applied on top of a preset document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    /// Plugins to add.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Extends entries to append.
    #[serde(default)]
    pub extends: Vec<String>,

    /// Per-rule settings, in the engine's value shapes.
    #[serde(default)]
    pub rules: toml::Table,
}

impl Overrides {
    /// Loads overrides from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, OverrideError> {
        let content = std::fs::read_to_string(path).map_err(|e| OverrideError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses overrides from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, OverrideError> {
        toml::from_str(content).map_err(|e| OverrideError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns true if no overrides are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty() && self.extends.is_empty() && self.rules.is_empty()
    }

    /// Applies the overrides on top of `doc`, returning the merged document.
    ///
    /// Rule overrides follow the usual later-wins semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule value has an invalid shape or severity.
    pub fn apply(&self, doc: &ConfigDocument) -> Result<ConfigDocument, OverrideError> {
        let mut merged = doc.clone();

        for plugin in &self.plugins {
            if !merged.plugins.contains(plugin) {
                merged.plugins.push(plugin.clone());
            }
        }
        for entry in &self.extends {
            if !merged.extends.contains(entry) {
                merged.extends.push(entry.clone());
            }
        }
        for (name, value) in &self.rules {
            merged.rules.insert(name, convert_rule(name, value)?);
        }

        Ok(merged)
    }
}

/// Converts a TOML rule value to a [`RuleEntry`].
fn convert_rule(name: &str, value: &TomlValue) -> Result<RuleEntry, OverrideError> {
    match value {
        TomlValue::String(_) | TomlValue::Integer(_) => {
            Ok(RuleEntry::new(convert_severity(name, value)?))
        }
        TomlValue::Array(items) => {
            let severity_value = items.first().ok_or_else(|| OverrideError::InvalidRule {
                rule: name.to_string(),
                reason: "array form must start with a severity".to_string(),
            })?;
            let severity = convert_severity(name, severity_value)?;
            let options = items.iter().skip(1).map(toml_to_json).collect();
            Ok(RuleEntry::new(severity).with_options(options))
        }
        other => Err(OverrideError::InvalidRule {
            rule: name.to_string(),
            reason: format!("expected a severity or an array, found {}", other.type_str()),
        }),
    }
}

fn convert_severity(name: &str, value: &TomlValue) -> Result<Severity, OverrideError> {
    match value {
        TomlValue::String(s) => s.parse().map_err(|_| OverrideError::UnknownSeverity {
            rule: name.to_string(),
            value: s.clone(),
        }),
        TomlValue::Integer(level) => u64::try_from(*level)
            .ok()
            .and_then(Severity::from_level)
            .ok_or_else(|| OverrideError::UnknownSeverity {
                rule: name.to_string(),
                value: level.to_string(),
            }),
        other => Err(OverrideError::UnknownSeverity {
            rule: name.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Converts a TOML value to the JSON value the engine expects.
fn toml_to_json(value: &TomlValue) -> JsonValue {
    match value {
        TomlValue::String(s) => JsonValue::String(s.clone()),
        TomlValue::Integer(i) => JsonValue::from(*i),
        TomlValue::Float(f) => {
            serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number)
        }
        TomlValue::Boolean(b) => JsonValue::Bool(*b),
        TomlValue::Datetime(dt) => JsonValue::String(dt.to_string()),
        TomlValue::Array(items) => JsonValue::Array(items.iter().map(toml_to_json).collect()),
        TomlValue::Table(table) => JsonValue::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Errors loading or applying overrides.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    /// IO error reading the overrides file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed TOML.
    #[error("invalid overrides: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },

    /// A rule override with an unknown severity.
    #[error("rules.{rule}: unknown severity `{value}`, expected: off, warn, error (or 0, 1, 2)")]
    UnknownSeverity {
        /// The rule being overridden.
        rule: String,
        /// The invalid value.
        value: String,
    },

    /// A rule override with an invalid shape.
    #[error("rules.{rule}: {reason}")]
    InvalidRule {
        /// The rule being overridden.
        rule: String,
        /// Why the value was rejected.
        reason: String,
    },
}
