// File: src/error.rs
// Purpose: Error taxonomy for the validation engine

use thiserror::Error;

/// Errors raised by the engine.
///
/// A failed rule is never an error: it is recorded as a message in a
/// [`Verdict`](crate::Verdict). These variants describe programming or
/// configuration mistakes that must surface to the caller immediately.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// A rule application referenced a rule that is not registered.
    #[error("Validation method {rule} does not exist")]
    RuleNotFound { rule: String },

    /// Validation was requested for a field the engine does not know about.
    #[error("Field {field} has not been added to the validator")]
    FieldNotFound { field: String },

    /// A pipe-delimited rule string could not be parsed.
    #[error("Invalid rule syntax in `{input}`: {reason}")]
    InvalidRuleSyntax { input: String, reason: String },

    /// A form layout was not valid JSON or did not have the expected shape.
    #[error("JSON is not valid: {0}")]
    InvalidLayout(#[from] serde_json::Error),

    /// A form layout entry has no `name`, or its `name` is not a string, number or bool.
    #[error("Layout field #{index} has no usable name attribute")]
    UnnamedLayoutField { index: usize },

    /// A rule was registered under an empty name.
    #[error("Validation methods must have a non-empty name")]
    EmptyRuleName,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ValidatorError>;
