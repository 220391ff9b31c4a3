// File: src/verdict.rs
// Purpose: Results of validating one field or a batch of pending validations

use crate::field::Field;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

fn serialize_field_name<S: Serializer>(field: &Field, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(field.name())
}

/// Outcome of validating a single field
///
/// Messages are owned copies, so later changes to rules or fields never
/// alter a verdict that has already been returned.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// `true` when no rule failed
    pub valid: bool,
    /// One formatted message per failed rule, in evaluation order
    pub messages: Vec<String>,
    /// The field that was validated
    #[serde(serialize_with = "serialize_field_name")]
    pub field: Field,
}

impl Verdict {
    pub fn new(field: Field, messages: Vec<String>) -> Self {
        Self {
            valid: messages.is_empty(),
            messages,
            field,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn field_name(&self) -> &str {
        self.field.name()
    }

    /// First failure message, if any
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Outcome of running every pending validation
#[derive(Debug, Clone, Serialize)]
pub struct AggregateVerdict {
    /// `true` when every field passed
    pub valid: bool,
    /// Per-field verdicts, in queue order
    pub fields: IndexMap<String, Verdict>,
    /// All failure messages, field by field
    pub messages: Vec<String>,
}

impl AggregateVerdict {
    /// Combine per-field verdicts
    pub fn from_fields(fields: IndexMap<String, Verdict>) -> Self {
        let messages: Vec<String> = fields
            .values()
            .flat_map(|verdict| verdict.messages.iter().cloned())
            .collect();
        Self {
            valid: fields.values().all(Verdict::is_valid),
            fields,
            messages,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Verdict for one field
    pub fn field(&self, name: &str) -> Option<&Verdict> {
        self.fields.get(name)
    }

    /// Verdicts of the fields that failed
    pub fn invalid_fields(&self) -> impl Iterator<Item = &Verdict> {
        self.fields.values().filter(|verdict| !verdict.valid)
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Verdict::first_message)
    }

    /// Field name -> messages, for failing fields only
    pub fn errors(&self) -> IndexMap<&str, &[String]> {
        self.invalid_fields()
            .map(|verdict| (verdict.field_name(), verdict.messages.as_slice()))
            .collect()
    }
}
