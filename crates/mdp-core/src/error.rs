//! Error types and exit codes for mdp
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (invalid input, missing entity, config, parse, I/O)
//! - 2: Usage error or project not found

mod macros;

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Exit codes for the mdp binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error or missing project (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during mdp operations
#[derive(Error, Debug)]
pub enum MdpError {
    #[error("No .mdp/ directory found at {}", path.display())]
    ProjectNotFound { path: PathBuf },

    #[error("{message}")]
    InvalidInput {
        message: String,
        details: Vec<(String, Value)>,
    },

    #[error("Issue {id} not found")]
    IssueNotFound { id: String, project_path: PathBuf },

    #[error("Milestone {id} not found")]
    MilestoneNotFound { id: String, project_path: PathBuf },

    #[error("Invalid date \"{0}\". Expected format: YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("unknown format: {0} (expected: json or table)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert any serializable value into an error detail value
pub fn detail<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl MdpError {
    /// Create an invalid input error without details
    pub fn invalid_input(message: impl Into<String>) -> Self {
        MdpError::InvalidInput {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Create an invalid input error carrying key/value details
    pub fn invalid_input_with(message: impl Into<String>, details: Vec<(String, Value)>) -> Self {
        MdpError::InvalidInput {
            message: message.into(),
            details,
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl std::fmt::Display) -> Self {
        MdpError::Config(reason.to_string())
    }

    /// Create a parse error for a file
    pub fn parse(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        MdpError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MdpError::ProjectNotFound { .. } | MdpError::UsageError(_) => ExitCode::Usage,

            MdpError::InvalidInput { .. }
            | MdpError::IssueNotFound { .. }
            | MdpError::MilestoneNotFound { .. }
            | MdpError::InvalidDate(_)
            | MdpError::Config(_)
            | MdpError::Parse { .. }
            | MdpError::UnknownFormat(_)
            | MdpError::Io(_)
            | MdpError::Yaml(_)
            | MdpError::Json(_) => ExitCode::Failure,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            MdpError::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            MdpError::InvalidInput { .. } | MdpError::UnknownFormat(_) => "INVALID_INPUT",
            MdpError::IssueNotFound { .. } => "ISSUE_NOT_FOUND",
            MdpError::MilestoneNotFound { .. } => "MILESTONE_NOT_FOUND",
            MdpError::InvalidDate(_) => "INVALID_DATE",
            MdpError::Config(_) => "CONFIG_ERROR",
            MdpError::Parse { .. } => "PARSE_ERROR",
            MdpError::UsageError(_) => "USAGE_ERROR",
            MdpError::Io(_) | MdpError::Yaml(_) | MdpError::Json(_) => "UNKNOWN_ERROR",
        }
    }

    fn details(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match self {
            MdpError::ProjectNotFound { path } => {
                map.insert("projectPath".to_string(), detail(&path.display().to_string()));
            }
            MdpError::InvalidInput { details, .. } => {
                for (key, value) in details {
                    map.insert(key.clone(), value.clone());
                }
            }
            MdpError::IssueNotFound { id, project_path }
            | MdpError::MilestoneNotFound { id, project_path } => {
                map.insert("id".to_string(), detail(id));
                map.insert(
                    "projectPath".to_string(),
                    detail(&project_path.display().to_string()),
                );
            }
            MdpError::InvalidDate(date) => {
                map.insert("date".to_string(), detail(date));
            }
            MdpError::Config(reason) => {
                map.insert("reason".to_string(), detail(reason));
            }
            MdpError::Parse { path, reason } => {
                map.insert("path".to_string(), detail(&path.display().to_string()));
                map.insert("reason".to_string(), detail(reason));
            }
            MdpError::UnknownFormat(format) => {
                map.insert("format".to_string(), detail(format));
            }
            MdpError::UsageError(_) | MdpError::Io(_) | MdpError::Yaml(_) | MdpError::Json(_) => {}
        }
        map
    }

    /// Convert error to the JSON error envelope written to stderr
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "ok": false,
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "details": Value::Object(self.details()),
            }
        })
    }
}

/// Result type alias for mdp operations
pub type Result<T> = std::result::Result<T, MdpError>;
