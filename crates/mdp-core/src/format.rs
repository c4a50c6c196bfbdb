//! Output format handling for mdp
//!
//! - json: success/error envelopes for machine consumption (default)
//! - table: aligned columns for terminal use
//!
//! Also holds the number serializers shared by JSON output: whole values are
//! written as integers so `2.0` prints as `2`.

use std::fmt;
use std::str::FromStr;

use serde::Serializer;

use crate::error::MdpError;

/// Output format for mdp commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON envelope output (default)
    #[default]
    Json,
    /// Aligned table output
    Table,
}

impl FromStr for OutputFormat {
    type Err = MdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(MdpError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Serialize a number, writing whole values as JSON integers
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// [`serialize_number`] for optional fields; `None` is written as `null`
pub fn serialize_opt_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_number(v, serializer),
        None => serializer.serialize_none(),
    }
}
