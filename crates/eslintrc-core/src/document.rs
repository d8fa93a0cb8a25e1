//! The configuration document and its builder.

use crate::rules::{RuleEntry, RulesMap};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;

/// Base-ruleset rules that a namespaced rule shadows.
///
/// When the shadowing rule is enabled, the base rule must be explicitly
/// `off` — otherwise the engine reports the same finding twice, sometimes
/// with contradicting options.
const SHADOWED_RULES: &[(&str, &str)] = &[
    ("camelcase", "@typescript-eslint/naming-convention"),
    ("no-unused-vars", "@typescript-eslint/no-unused-vars"),
];

/// A lint configuration document, as loaded by the external engine.
///
/// Constructed once (via [`ConfigDocument::builder`] or deserialization)
/// and immutable afterwards. Serializes to the engine's exact shape:
/// `root`, `parser`, `plugins`, `extends`, `settings`, `rules`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigDocument {
    /// Stop upward config search at this document.
    #[serde(default)]
    pub(crate) root: bool,

    /// Syntax parser the engine should use.
    #[serde(default)]
    pub(crate) parser: Option<String>,

    /// Extension packs enabling additional rule namespaces.
    #[serde(default)]
    pub(crate) plugins: Vec<String>,

    /// Named base rule sets to merge, later entries overriding earlier.
    #[serde(default)]
    pub(crate) extends: Vec<String>,

    /// Shared resolver configuration, keyed by concern.
    #[serde(default)]
    pub(crate) settings: serde_json::Map<String, Value>,

    /// Per-rule overrides, applied after the full extends chain.
    #[serde(default)]
    pub(crate) rules: RulesMap,
}

impl ConfigDocument {
    /// Starts building a document.
    #[must_use]
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder {
            doc: Self::default(),
        }
    }

    /// Whether upward config search stops here.
    #[must_use]
    pub fn root(&self) -> bool {
        self.root
    }

    /// The configured parser, if any.
    #[must_use]
    pub fn parser(&self) -> Option<&str> {
        self.parser.as_deref()
    }

    /// Declared plugins, in declaration order.
    #[must_use]
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// The extends chain, in priority order (later overrides earlier).
    #[must_use]
    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    /// Resolver settings.
    #[must_use]
    pub fn settings(&self) -> &serde_json::Map<String, Value> {
        &self.settings
    }

    /// The per-rule overrides.
    #[must_use]
    pub fn rules(&self) -> &RulesMap {
        &self.rules
    }

    /// Parses a document from engine-shaped JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a rule setting has an
    /// invalid shape. Duplicate rule keys are not an error — the last
    /// declaration wins, as in the engine.
    pub fn from_json(content: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(content).map_err(|e| DocumentError::Parse {
            message: e.to_string(),
        })
    }

    /// Reads and parses a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Renders the document as pretty-printed engine-shaped JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Parse {
            message: e.to_string(),
        })
    }

    /// Validates document consistency.
    ///
    /// Checks that identifiers are well-formed and that every enabled
    /// shadowing rule has its base-ruleset counterpart set to `off`
    /// (see [`SHADOWED_RULES`]).
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for plugin in &self.plugins {
            if plugin.is_empty() {
                return Err(ValidationError::EmptyIdentifier { field: "plugins" });
            }
        }
        for entry in &self.extends {
            if entry.is_empty() {
                return Err(ValidationError::EmptyIdentifier { field: "extends" });
            }
        }
        for (name, _) in self.rules.iter() {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(ValidationError::InvalidRuleName {
                    name: name.to_string(),
                });
            }
        }

        for &(base, shadow) in SHADOWED_RULES {
            let shadow_enabled = self.rules.get(shadow).is_some_and(RuleEntry::is_enabled);
            let base_enabled = self.rules.get(base).is_some_and(RuleEntry::is_enabled);
            if shadow_enabled && base_enabled {
                return Err(ValidationError::ShadowedRuleEnabled {
                    base: base.to_string(),
                    shadow: shadow.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = 2; // root + rules, always present
        len += usize::from(self.parser.is_some());
        len += usize::from(!self.plugins.is_empty());
        len += usize::from(!self.extends.is_empty());
        len += usize::from(!self.settings.is_empty());

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("root", &self.root)?;
        if let Some(parser) = &self.parser {
            map.serialize_entry("parser", parser)?;
        }
        if !self.plugins.is_empty() {
            map.serialize_entry("plugins", &self.plugins)?;
        }
        if !self.extends.is_empty() {
            map.serialize_entry("extends", &self.extends)?;
        }
        if !self.settings.is_empty() {
            map.serialize_entry("settings", &self.settings)?;
        }
        map.serialize_entry("rules", &self.rules)?;
        map.end()
    }
}

/// Builder for [`ConfigDocument`].
///
/// Construction is infallible; call [`ConfigDocument::validate`] afterwards
/// when the input is not statically known.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: ConfigDocument,
}

impl DocumentBuilder {
    /// Sets the `root` flag.
    #[must_use]
    pub fn root(mut self, root: bool) -> Self {
        self.doc.root = root;
        self
    }

    /// Sets the parser.
    #[must_use]
    pub fn parser(mut self, parser: impl Into<String>) -> Self {
        self.doc.parser = Some(parser.into());
        self
    }

    /// Appends a plugin.
    #[must_use]
    pub fn plugin(mut self, plugin: impl Into<String>) -> Self {
        self.doc.plugins.push(plugin.into());
        self
    }

    /// Appends an extends entry. Order matters: later entries override
    /// earlier ones in the engine's merge.
    #[must_use]
    pub fn extend(mut self, base: impl Into<String>) -> Self {
        self.doc.extends.push(base.into());
        self
    }

    /// Sets a settings key.
    #[must_use]
    pub fn setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.doc.settings.insert(key.into(), value);
        self
    }

    /// Declares a rule setting. Re-declaring a key overwrites the previous
    /// value silently (last write wins), exactly like a JS object literal.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, entry: RuleEntry) -> Self {
        self.doc.rules.insert(name, entry);
        self
    }

    /// Finishes the document.
    #[must_use]
    pub fn build(self) -> ConfigDocument {
        self.doc
    }
}

/// Errors reading or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// IO error reading a document file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed document JSON.
    #[error("invalid config document: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
}

/// Document consistency errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// An empty identifier in `plugins` or `extends`.
    #[error("{field} must not contain empty identifiers")]
    EmptyIdentifier {
        /// Which list held the empty entry.
        field: &'static str,
    },

    /// A rule name that the engine would reject.
    #[error("invalid rule name `{name}`")]
    InvalidRuleName {
        /// The offending name.
        name: String,
    },

    /// A shadowing rule is enabled while its base rule is not `off`.
    #[error("`{shadow}` is enabled but `{base}` is not set to \"off\"")]
    ShadowedRuleEnabled {
        /// The base-ruleset rule that must be disabled.
        base: String,
        /// The namespaced rule that shadows it.
        shadow: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> ConfigDocument {
        ConfigDocument::builder()
            .root(true)
            .parser("@typescript-eslint/parser")
            .plugin("@typescript-eslint")
            .plugin("import")
            .setting("import/resolver", json!({ "typescript": {} }))
            .rule("camelcase", RuleEntry::off())
            .build()
    }

    #[test]
    fn builder_assembles_document() {
        let doc = minimal();
        assert!(doc.root());
        assert_eq!(doc.parser(), Some("@typescript-eslint/parser"));
        assert_eq!(doc.plugins(), ["@typescript-eslint", "import"]);
        assert!(doc.settings().contains_key("import/resolver"));
        assert!(doc.rules().contains("camelcase"));
    }

    #[test]
    fn serializes_engine_shape_in_field_order() {
        let doc = minimal();
        let json = serde_json::to_string(&doc).unwrap();
        let root_pos = json.find("\"root\"").unwrap();
        let parser_pos = json.find("\"parser\"").unwrap();
        let rules_pos = json.find("\"rules\"").unwrap();
        assert!(root_pos < parser_pos && parser_pos < rules_pos);
    }

    #[test]
    fn empty_sections_omitted() {
        let doc = ConfigDocument::builder().root(true).build();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json, json!({ "root": true, "rules": {} }));
    }

    #[test]
    fn json_round_trip() {
        let doc = minimal();
        let json = doc.to_json_pretty().unwrap();
        let parsed = ConfigDocument::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn from_json_accepts_numeric_severities() {
        let doc = ConfigDocument::from_json(
            r#"{ "root": true, "rules": { "@typescript-eslint/ban-ts-comment": 2 } }"#,
        )
        .unwrap();
        let entry = doc.rules().get("@typescript-eslint/ban-ts-comment").unwrap();
        assert_eq!(entry.severity(), crate::Severity::Error);
    }

    #[test]
    fn validate_accepts_shadow_pair_with_base_off() {
        let doc = ConfigDocument::builder()
            .rule("camelcase", RuleEntry::off())
            .rule("@typescript-eslint/naming-convention", RuleEntry::error())
            .build();
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn validate_rejects_enabled_base_under_shadow() {
        let doc = ConfigDocument::builder()
            .rule("camelcase", RuleEntry::error())
            .rule("@typescript-eslint/naming-convention", RuleEntry::error())
            .build();
        assert!(matches!(
            doc.validate(),
            Err(ValidationError::ShadowedRuleEnabled { .. })
        ));
    }

    #[test]
    fn validate_allows_shadow_without_base_declared() {
        let doc = ConfigDocument::builder()
            .rule("@typescript-eslint/no-unused-vars", RuleEntry::error())
            .build();
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn validate_rejects_whitespace_rule_name() {
        let doc = ConfigDocument::builder()
            .rule("bad name", RuleEntry::off())
            .build();
        assert!(matches!(
            doc.validate(),
            Err(ValidationError::InvalidRuleName { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_plugin() {
        let doc = ConfigDocument::builder().plugin("").build();
        assert!(matches!(
            doc.validate(),
            Err(ValidationError::EmptyIdentifier { field: "plugins" })
        ));
    }
}
