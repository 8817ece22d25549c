//! Attribute-accessible tree over a parsed YAML document
//!
//! [`ConfigBox`] is a mapping node: string keys to [`ConfigValue`]s.
//! [`ConfigValue`] is the tagged union over every node kind YAML produces.
//! Both support key indexing (`cfg["key"]`, yielding `Null` when absent) and
//! fallible named-field access (`cfg.field("key")?`).

use std::collections::btree_map::{self, BTreeMap};
use std::ops::Index;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Number, Value};

use crate::domain::error::ConfigError;

static NULL: ConfigValue = ConfigValue::Null;

/// A single node of a loaded config tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(ConfigBox),
}

impl ConfigValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Any number, integers included
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_box(&self) -> Option<&ConfigBox> {
        match self {
            Self::Mapping(inner) => Some(inner),
            _ => None,
        }
    }

    /// Name of the node kind, used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl TryFrom<Value> for ConfigValue {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(mapping) => Self::Mapping(ConfigBox::try_from(mapping)?),
            // Tags carry no meaning for config lookups
            Value::Tagged(tagged) => Self::try_from(tagged.value)?,
        })
    }
}

impl Index<&str> for ConfigValue {
    type Output = Self;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Self::Mapping(inner) => &inner[key],
            _ => &NULL,
        }
    }
}

impl Index<usize> for ConfigValue {
    type Output = Self;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Self::Sequence(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl PartialEq<str> for ConfigValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for ConfigValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for ConfigValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<bool> for ConfigValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

macro_rules! partial_eq_signed {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for ConfigValue {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_i64() == Some(i64::from(*other))
                }
            }
        )*
    };
}

partial_eq_signed!(i32, i64, u32);

impl PartialEq<u64> for ConfigValue {
    fn eq(&self, other: &u64) -> bool {
        self.as_u64() == Some(*other)
    }
}

impl PartialEq<usize> for ConfigValue {
    fn eq(&self, other: &usize) -> bool {
        self.as_u64().and_then(|n| usize::try_from(n).ok()) == Some(*other)
    }
}

impl PartialEq<f64> for ConfigValue {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

/// Mapping node of a config tree
///
/// Keys are kept sorted; YAML mapping order carries no meaning here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigBox {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Named-field access; fails with `MissingKey` instead of yielding `Null`
    pub fn field(&self, name: &str) -> Result<&ConfigValue, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingKey(name.to_string()))
    }

    /// Look up a dotted path such as `data_ingestion.sources.0.url`
    ///
    /// A key containing dots is matched whole before the path is split.
    /// Numeric segments index into sequences.
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        if let Some(value) = self.get(path) {
            return Some(value);
        }

        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                ConfigValue::Mapping(inner) => inner.get(segment)?,
                ConfigValue::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Integer field, accepting numeric strings such as `"32"`
    pub fn int(&self, key: &str) -> Result<i64, ConfigError> {
        let value = self.field(key)?;
        let parsed = match value {
            ConfigValue::Number(n) => n.as_i64(),
            ConfigValue::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| type_mismatch(key, "integer", value))
    }

    /// Float field, accepting integers and numeric strings
    pub fn float(&self, key: &str) -> Result<f64, ConfigError> {
        let value = self.field(key)?;
        let parsed = match value {
            ConfigValue::Number(n) => n.as_f64(),
            ConfigValue::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| type_mismatch(key, "float", value))
    }

    /// Boolean field, accepting `yes/no`, `on/off`, `true/false`, `1/0`
    pub fn bool(&self, key: &str) -> Result<bool, ConfigError> {
        let value = self.field(key)?;
        let parsed = match value {
            ConfigValue::Bool(b) => Some(*b),
            ConfigValue::Number(n) => match n.as_i64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            ConfigValue::String(s) => parse_flag(s),
            _ => None,
        };
        parsed.ok_or_else(|| type_mismatch(key, "bool", value))
    }

    /// Sequence field; a string is split on commas with each item trimmed
    pub fn list(&self, key: &str) -> Result<Vec<ConfigValue>, ConfigError> {
        let value = self.field(key)?;
        match value {
            ConfigValue::Sequence(items) => Ok(items.clone()),
            ConfigValue::String(s) => Ok(s
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| ConfigValue::String(item.to_string()))
                .collect()),
            _ => Err(type_mismatch(key, "sequence", value)),
        }
    }

    /// Bind the tree to a concrete schema type
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let value = serde_yaml::to_value(self).map_err(ConfigError::Extract)?;
        serde_yaml::from_value(value).map_err(ConfigError::Extract)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Mapping> for ConfigBox {
    type Error = ConfigError;

    fn try_from(mapping: Mapping) -> Result<Self, Self::Error> {
        let mut entries = BTreeMap::new();
        for (key, value) in mapping {
            match entries.entry(key_to_string(key)?) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(ConfigValue::try_from(value)?);
                }
                btree_map::Entry::Occupied(slot) => {
                    return Err(ConfigError::DuplicateKey(slot.key().clone()));
                }
            }
        }
        Ok(Self { entries })
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigBox {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConfigBox {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<&str> for ConfigBox {
    type Output = ConfigValue;

    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Name of a raw YAML node kind, matching [`ConfigValue::type_name`]
pub(crate) fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(tagged) => yaml_type_name(&tagged.value),
    }
}

// Scalar keys become their YAML text, so `1: a` is reachable as `cfg["1"]`
fn key_to_string(key: Value) -> Result<String, ConfigError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        other => Err(ConfigError::UnsupportedKey(
            yaml_type_name(&other).to_string(),
        )),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn type_mismatch(key: &str, expected: &'static str, found: &ConfigValue) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}
