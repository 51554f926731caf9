//! Structured error types shared across weave crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`WeaveError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (positions, sizes, node kinds).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        for (key, value) in self.context.iter() {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the weave engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum WeaveError {
    /// Matrix construction errors (empty child lists, overflowing sizes).
    #[error("build error: {0}")]
    Build(ErrorInfo),
    /// Indexing contract violations.
    #[error("index error: {0}")]
    Index(ErrorInfo),
    /// Plan description and expansion errors.
    #[error("plan error: {0}")]
    Plan(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl WeaveError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            WeaveError::Build(info)
            | WeaveError::Index(info)
            | WeaveError::Plan(info)
            | WeaveError::Serde(info) => info,
        }
    }
}
