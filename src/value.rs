//! Input kinds and the tagged runtime value flowing through a chain.
//!
//! The three input kinds mirror the selectable input types of the explorer
//! UI. A `TypedValue` starts out matching the declared kind but may change
//! kind mid-chain (e.g. `.split(' ')` turns text into a list); operations
//! check the actual kind at application time.

use anyhow::bail;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Declared shape of the raw input. Governs which operations are offered
/// and how the raw text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    List,
    Mapping,
}

impl InputType {
    pub const ALL: [Self; 3] = [Self::Text, Self::List, Self::Mapping];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::List => "list",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "list" => Ok(Self::List),
            "mapping" => Ok(Self::Mapping),
            other => bail!("unknown input type: {} (expected text, list or mapping)", other),
        }
    }
}

/// A parsed value at some point in the chain.
///
/// Lists and mappings hold `serde_json::Value` elements so nested
/// JSON-like structures come along for free. Mappings keep insertion
/// order (`preserve_order`), matching how the source objects read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Text(String),
    List(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl TypedValue {
    /// Kind name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "a list",
            Self::Mapping(_) => "a mapping",
        }
    }

    /// Compact JSON rendering used in trace lines. Text comes out quoted,
    /// exactly as `JSON.stringify` would print it.
    pub fn render(&self) -> String {
        self.to_json().to_string()
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.clone()),
            Self::Mapping(map) => Value::Object(map.clone()),
        }
    }
}
