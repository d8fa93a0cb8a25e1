//! Rule severities, per-rule entries, and the ordered rules map.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Severity level for a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Violations are reported but do not fail the lint run.
    Warn,
    /// Violations fail the lint run.
    Error,
}

impl Severity {
    /// Returns the canonical string form the engine emits.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Converts the legacy numeric form (`0`/`1`/`2`).
    #[must_use]
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Warn),
            2 => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a severity from its string form.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown severity `{value}`, expected: off, warn, error (or 0, 1, 2)")]
pub struct ParseSeverityError {
    /// The invalid value.
    pub value: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"off\", \"warn\", \"error\", or 0..=2")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
                Severity::from_level(v)
                    .ok_or_else(|| E::custom(format!("severity level out of range: {v}")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
                let level = u64::try_from(v)
                    .map_err(|_| E::custom(format!("severity level out of range: {v}")))?;
                self.visit_u64(level)
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

/// Setting for a single rule: a severity plus optional rule-specific options.
///
/// Mirrors the engine's wire shape — a bare severity (`"error"`) when there
/// are no options, otherwise an array (`["error", {...}, ...]`).
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    severity: Severity,
    options: Vec<Value>,
}

impl RuleEntry {
    /// Creates an entry with the given severity and no options.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    /// Creates a disabled entry.
    #[must_use]
    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    /// Creates a warning-level entry.
    #[must_use]
    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    /// Creates an error-level entry.
    #[must_use]
    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Attaches rule-specific options, keeping the severity.
    #[must_use]
    pub fn with_options(mut self, options: Vec<Value>) -> Self {
        self.options = options;
        self
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the rule-specific options (empty when none were given).
    #[must_use]
    pub fn options(&self) -> &[Value] {
        &self.options
    }

    /// Returns true unless the severity is `off`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }
}

impl fmt::Display for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.is_empty() {
            return write!(f, "\"{}\"", self.severity);
        }
        write!(f, "[\"{}\"", self.severity)?;
        for option in &self.options {
            write!(f, ", {option}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.severity.serialize(serializer);
        }
        let mut seq = serializer.serialize_seq(Some(1 + self.options.len()))?;
        seq.serialize_element(&self.severity)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity or a [severity, options...] array")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RuleEntry, E> {
                v.parse().map(RuleEntry::new).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RuleEntry, E> {
                Severity::from_level(v)
                    .map(RuleEntry::new)
                    .ok_or_else(|| E::custom(format!("severity level out of range: {v}")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RuleEntry, E> {
                let level = u64::try_from(v)
                    .map_err(|_| E::custom(format!("severity level out of range: {v}")))?;
                self.visit_u64(level)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleEntry, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("rule entry array must not be empty"))?;
                let mut options = Vec::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    options.push(value);
                }
                Ok(RuleEntry::new(severity).with_options(options))
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

/// Ordered rule-name → [`RuleEntry`] mapping with JS-object semantics.
///
/// Inserting an existing key replaces the value in place — the key keeps its
/// original position, the last written value wins, and no error is raised.
/// Source documents rely on this: `import/no-extraneous-dependencies` is
/// deliberately declared twice and the second declaration is authoritative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulesMap {
    entries: Vec<(String, RuleEntry)>,
}

impl RulesMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule setting. A duplicate key silently overwrites the
    /// previous value (last write wins).
    pub fn insert(&mut self, name: impl Into<String>, entry: RuleEntry) {
        let name = name.into();
        if let Some(existing) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = entry;
        } else {
            self.entries.push((name, entry));
        }
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| e)
    }

    /// Returns true if the rule is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of declared rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no rules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }
}

impl Serialize for RulesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RulesMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = RulesMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a rule-name → setting map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RulesMap, A::Error> {
                let mut rules = RulesMap::new();
                // Duplicate keys overwrite via insert, matching the engine.
                while let Some((name, entry)) = access.next_entry::<String, RuleEntry>()? {
                    rules.insert(name, entry);
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- Severity --

    #[test]
    fn severity_parses_string_forms() {
        assert_eq!("off".parse::<Severity>().unwrap(), Severity::Off);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_deserializes_numeric_forms() {
        let sev: Severity = serde_json::from_str("2").unwrap();
        assert_eq!(sev, Severity::Error);
        let sev: Severity = serde_json::from_str("0").unwrap();
        assert_eq!(sev, Severity::Off);
        assert!(serde_json::from_str::<Severity>("3").is_err());
    }

    #[test]
    fn severity_always_serializes_as_string() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }

    // -- RuleEntry --

    #[test]
    fn bare_entry_serializes_as_severity_string() {
        let json = serde_json::to_value(RuleEntry::off()).unwrap();
        assert_eq!(json, json!("off"));
    }

    #[test]
    fn entry_with_options_serializes_as_array() {
        let entry = RuleEntry::error().with_options(vec![json!({ "vars": "all" })]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, json!(["error", { "vars": "all" }]));
    }

    #[test]
    fn entry_deserializes_both_wire_forms() {
        let bare: RuleEntry = serde_json::from_value(json!("warn")).unwrap();
        assert_eq!(bare, RuleEntry::warn());

        let numeric: RuleEntry = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(numeric, RuleEntry::error());

        let with_options: RuleEntry =
            serde_json::from_value(json!(["error", "always", { "js": "never" }])).unwrap();
        assert_eq!(with_options.severity(), Severity::Error);
        assert_eq!(with_options.options().len(), 2);
    }

    #[test]
    fn empty_entry_array_rejected() {
        assert!(serde_json::from_value::<RuleEntry>(json!([])).is_err());
    }

    #[test]
    fn entry_display_matches_wire_shape() {
        assert_eq!(RuleEntry::off().to_string(), "\"off\"");
        let entry = RuleEntry::error().with_options(vec![json!("always")]);
        assert_eq!(entry.to_string(), "[\"error\", \"always\"]");
    }

    // -- RulesMap --

    #[test]
    fn insert_and_get() {
        let mut rules = RulesMap::new();
        rules.insert("camelcase", RuleEntry::off());
        assert!(rules.contains("camelcase"));
        assert_eq!(rules.get("camelcase"), Some(&RuleEntry::off()));
        assert!(rules.get("no-console").is_none());
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let mut rules = RulesMap::new();
        rules.insert("some-rule", RuleEntry::error().with_options(vec![json!("V1")]));
        rules.insert("other-rule", RuleEntry::warn());
        rules.insert("some-rule", RuleEntry::error().with_options(vec![json!("V2")]));

        // Last value wins, no error, key count unchanged.
        assert_eq!(rules.len(), 2);
        let resolved = rules.get("some-rule").unwrap();
        assert_eq!(resolved.options(), &[json!("V2")]);
    }

    #[test]
    fn duplicate_key_keeps_first_position() {
        let mut rules = RulesMap::new();
        rules.insert("a", RuleEntry::off());
        rules.insert("b", RuleEntry::off());
        rules.insert("a", RuleEntry::error());

        let names: Vec<&str> = rules.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn serializes_in_declaration_order() {
        let mut rules = RulesMap::new();
        rules.insert("z-rule", RuleEntry::off());
        rules.insert("a-rule", RuleEntry::error());

        let json = serde_json::to_string(&rules).unwrap();
        assert!(json.find("z-rule").unwrap() < json.find("a-rule").unwrap());
    }

    #[test]
    fn deserializes_duplicate_json_keys_last_wins() {
        let json = r#"{ "dup": "warn", "dup": "error" }"#;
        let rules: RulesMap = serde_json::from_str(json).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get("dup"), Some(&RuleEntry::error()));
    }
}
