//! Markdown front matter splitting and lenient YAML decoding
//!
//! Entity files look like:
//!
//! ```text
//! ---
//! title: Implement caching layer
//! status: To Do
//! ---
//!
//! Body text...
//! ```
//!
//! Decoding is forgiving: unknown keys are ignored, missing keys default, and
//! scalars of the wrong type are coerced where a string is expected.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::error::Result;

static FRONTMATTER_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn frontmatter_re() -> Option<&'static Regex> {
    FRONTMATTER_RE
        .get_or_init(|| Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n?(.*)\z").ok())
        .as_ref()
}

/// A markdown document split into its YAML header and body
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMarkdown {
    pub frontmatter: Value,
    pub content: String,
}

/// Split `raw` into front matter and body.
///
/// Text without a front matter block yields a null header and the whole text as body.
pub fn parse_markdown(raw: &str) -> Result<ParsedMarkdown> {
    let Some(caps) = frontmatter_re().and_then(|re| re.captures(raw)) else {
        return Ok(ParsedMarkdown {
            frontmatter: Value::Null,
            content: raw.to_string(),
        });
    };

    let yaml = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());
    let frontmatter: Value = if yaml.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(ParsedMarkdown {
        frontmatter,
        content: body.strip_prefix('\n').unwrap_or(body).to_string(),
    })
}

/// Decode a front matter value into a typed header.
///
/// Anything other than a mapping (null, a bare scalar, a list) carries no
/// fields, so it decodes to the header's defaults.
pub fn decode<T: DeserializeOwned + Default>(frontmatter: Value) -> Result<T> {
    if !frontmatter.is_mapping() {
        return Ok(T::default());
    }
    Ok(serde_yaml::from_value(frontmatter)?)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Lenient deserializers for front matter fields
pub(crate) mod lenient {
    use super::*;

    /// Any scalar as a string; null, sequences and mappings become `None`
    pub fn string<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(scalar_to_string(&value))
    }

    /// Numbers, or strings that parse as numbers
    pub fn number<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<f64>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// A sequence of scalars; anything else is an empty list
    pub fn strings<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Vec<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        })
    }

    /// A sequence of mappings decoded into `T`; non-mapping items are skipped
    pub fn records<'de, D, T>(d: D) -> std::result::Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Sequence(items) => items
                .into_iter()
                .filter(|item| item.is_mapping())
                .filter_map(|item| serde_yaml::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Only a literal `true` counts
    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<bool, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(matches!(value, Value::Bool(true)))
    }
}
