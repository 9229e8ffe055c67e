//! # Validator Errors
//!
//! A failed document is not an error here either: it is a
//! [`PropertyFailure`](crate::PropertyFailure). Errors cover registry
//! misuse and schema configuration problems.

use thiserror::Error;

/// Errors from the object validator.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// No schema registered for the requested target.
    #[error("no validation schema registered for target '{0}'")]
    UnknownTarget(String),

    /// The validated value is not a JSON object.
    #[error("value validated as '{target}' is not an object")]
    NotAnObject {
        /// Target the value was validated as.
        target: String,
    },

    /// A configured schema declares no properties.
    #[error("schema '{0}' declares no properties")]
    EmptySchema(String),

    /// A configured property declares no constraints.
    #[error("property '{property}' of schema '{target}' declares no constraints")]
    EmptyProperty {
        /// Schema target.
        target: String,
        /// Property without constraints.
        property: String,
    },

    /// A schema file could not be read or parsed.
    #[error("schema load error for '{path}': {reason}")]
    SchemaLoad {
        /// Path of the schema file.
        path: String,
        /// Underlying failure.
        reason: String,
    },

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
