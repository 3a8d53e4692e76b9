//! Input flavours, their shapes, and the customizer output document

use crate::error::CustomizerError;
use serde_yaml::{Mapping, Value};

pub const PARAMETER_SETS: &str = "parameterSets";
pub const FILE_FORMAT_VERSION: &str = "fileFormatVersion";
pub const DESIGN_DEFAULT_VALUES: &str = "design default values";

const DEFAULT_KEY: &str = "default";
const PARTS_KEY: &str = "parts";

/// One loaded input document, named after its source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Flavour {
    pub name: String,
    pub content: Value,
}

impl Flavour {
    pub fn new(name: impl Into<String>, content: Value) -> Self {
        Self { name: name.into(), content }
    }
}

/// The three layouts an input document can take.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentShape {
    /// A base mapping plus named overlays, in declaration order.
    DefaultParts { default: Mapping, parts: Vec<(String, Mapping)> },
    /// Value of the `design default values` key, copied through verbatim.
    DesignDefaults(Value),
    /// An already complete customizer document.
    Raw(Mapping),
}

impl DocumentShape {
    /// Classify a flavour by key presence.
    ///
    /// Only the `default` key selects the default/parts layout. A document
    /// carrying `parts` without `default` is treated as a raw customizer file.
    pub fn classify(flavour: &Flavour) -> Result<Self, CustomizerError> {
        let Value::Mapping(content) = &flavour.content else {
            return Err(CustomizerError::shape(&flavour.name, "document root is not a mapping"));
        };

        if let Some(default) = content.get(DEFAULT_KEY) {
            let default = as_mapping(&flavour.name, DEFAULT_KEY, default)?;
            let parts = match content.get(PARTS_KEY) {
                Some(parts) => as_mapping(&flavour.name, PARTS_KEY, parts)?,
                None => Mapping::new(),
            };

            let mut expanded = Vec::with_capacity(parts.len());
            for (key, overrides) in parts {
                let part_name = scalar_key(&key).ok_or_else(|| {
                    CustomizerError::shape(&flavour.name, "part names must be scalars")
                })?;
                let context = format!("{}.{}", PARTS_KEY, part_name);
                let overrides = as_mapping(&flavour.name, &context, &overrides)?;
                expanded.push((part_name, overrides));
            }
            return Ok(Self::DefaultParts { default, parts: expanded });
        }

        if let Some(values) = content.get(DESIGN_DEFAULT_VALUES) {
            return Ok(Self::DesignDefaults(values.clone()));
        }

        Ok(Self::Raw(content.clone()))
    }
}

/// A null value counts as an empty mapping.
fn as_mapping(flavour: &str, key: &str, value: &Value) -> Result<Mapping, CustomizerError> {
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(m) => Ok(m.clone()),
        other => Err(CustomizerError::shape(
            flavour,
            format!("'{}' must be a mapping, found {}", key, value_kind(other)),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Render a scalar mapping key as text. Returns `None` for composite keys.
pub fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The customizer document being built.
///
/// Starts as `{parameterSets: {}, fileFormatVersion: "1"}`; a raw input may
/// replace it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    root: Mapping,
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDocument {
    pub fn new() -> Self {
        let mut root = Mapping::new();
        root.insert(Value::from(PARAMETER_SETS), Value::Mapping(Mapping::new()));
        root.insert(Value::from(FILE_FORMAT_VERSION), Value::from("1"));
        Self { root }
    }

    pub fn from_raw(root: Mapping) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.root)
    }

    /// The `parameterSets` mapping, or `None` when a raw document lacks one.
    pub fn parameter_sets(&self) -> Result<Option<&Mapping>, CustomizerError> {
        match self.root.get(PARAMETER_SETS) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Mapping(sets)) => Ok(Some(sets)),
            Some(_) => Err(CustomizerError::shape(
                PARAMETER_SETS,
                "output 'parameterSets' is not a mapping",
            )),
        }
    }

    /// Insert or replace a parameter set, recreating `parameterSets` if needed.
    pub fn insert_set(&mut self, name: &str, set: Value) -> Result<(), CustomizerError> {
        let entry = self
            .root
            .entry(Value::from(PARAMETER_SETS))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if entry.is_null() {
            *entry = Value::Mapping(Mapping::new());
        }
        match entry {
            Value::Mapping(sets) => {
                sets.insert(Value::from(name), set);
                Ok(())
            }
            _ => Err(CustomizerError::shape(name, "output 'parameterSets' is not a mapping")),
        }
    }

    /// Parameter set names in document order.
    pub fn set_names(&self) -> Result<Vec<String>, CustomizerError> {
        let Some(sets) = self.parameter_sets()? else {
            return Ok(Vec::new());
        };
        sets.keys()
            .map(|k| {
                scalar_key(k).ok_or_else(|| {
                    CustomizerError::shape(PARAMETER_SETS, "parameter set names must be scalars")
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flavour(name: &str, yaml: &str) -> Flavour {
        Flavour::new(name, serde_yaml::from_str(yaml).expect("yaml"))
    }

    #[test]
    fn test_classify_default_parts() {
        let f = flavour("a", "default: {x: 1}\nparts:\n  p1: {y: 2}\n  p2: {z: 3}\n");
        match DocumentShape::classify(&f).expect("classify") {
            DocumentShape::DefaultParts { default, parts } => {
                assert_eq!(default.len(), 1);
                let names: Vec<&str> = parts.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["p1", "p2"]);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_classify_null_default_and_parts() {
        let f = flavour("a", "default:\nparts:\n");
        assert_eq!(
            DocumentShape::classify(&f).expect("classify"),
            DocumentShape::DefaultParts { default: Mapping::new(), parts: Vec::new() }
        );
    }

    #[test]
    fn test_classify_default_without_parts() {
        let f = flavour("a", "default: {x: 1}\n");
        match DocumentShape::classify(&f).expect("classify") {
            DocumentShape::DefaultParts { parts, .. } => assert!(parts.is_empty()),
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_classify_parts_without_default_is_raw() {
        let f = flavour("a", "parts:\n  p1: {y: 2}\n");
        assert!(matches!(DocumentShape::classify(&f).expect("classify"), DocumentShape::Raw(_)));
    }

    #[test]
    fn test_default_wins_over_design_default_values() {
        let f = flavour("a", "default: {}\n\"design default values\": {x: 1}\n");
        assert!(matches!(
            DocumentShape::classify(&f).expect("classify"),
            DocumentShape::DefaultParts { .. }
        ));
    }

    #[test]
    fn test_classify_design_default_values() {
        let f = flavour("a", "\"design default values\": {x: 1}\n");
        match DocumentShape::classify(&f).expect("classify") {
            DocumentShape::DesignDefaults(v) => assert_eq!(v["x"], Value::from(1)),
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_classify_rejects_non_mapping_part() {
        let f = flavour("a", "default: {}\nparts:\n  p1: [1, 2]\n");
        let err = DocumentShape::classify(&f).unwrap_err();
        assert!(err.to_string().contains("parts.p1"), "got: {}", err);
    }

    #[test]
    fn test_classify_rejects_scalar_root() {
        let f = flavour("a", "just text");
        assert!(DocumentShape::classify(&f).is_err());
    }

    #[test]
    fn test_null_part_means_no_overrides() {
        let f = flavour("a", "default: {x: 1}\nparts:\n  p1:\n");
        match DocumentShape::classify(&f).expect("classify") {
            DocumentShape::DefaultParts { parts, .. } => assert!(parts[0].1.is_empty()),
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_new_output_document_layout() {
        let doc = OutputDocument::new();
        let keys: Vec<_> = doc.root().keys().filter_map(scalar_key).collect();
        assert_eq!(keys, vec![PARAMETER_SETS, FILE_FORMAT_VERSION]);
        assert_eq!(doc.root()[FILE_FORMAT_VERSION], Value::from("1"));
        assert!(doc.set_names().expect("names").is_empty());
    }

    #[test]
    fn test_insert_set_recreates_missing_parameter_sets() {
        let mut doc = OutputDocument::from_raw(Mapping::new());
        assert!(doc.parameter_sets().expect("sets").is_none());
        doc.insert_set("a_p1", Value::Mapping(Mapping::new())).expect("insert");
        assert_eq!(doc.set_names().expect("names"), vec!["a_p1"]);
    }

    #[test]
    fn test_insert_set_rejects_non_mapping_parameter_sets() {
        let raw: Mapping = serde_yaml::from_str("parameterSets: 3").expect("yaml");
        let mut doc = OutputDocument::from_raw(raw);
        assert!(doc.insert_set("a_p1", Value::Null).is_err());
    }
}
