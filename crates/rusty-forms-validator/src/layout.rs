//! JSON form layouts
//!
//! A layout describes the fields of a form and, optionally, the rules each
//! field should be validated with:
//!
//! ```json
//! { "fields": [
//!     { "element": "input", "type": "text", "name": "username",
//!       "class": "userField", "validations": "min_length(5)|required" }
//! ] }
//! ```
//!
//! Every key other than `element` and `validations` becomes an attribute of
//! the generated field; those two describe how the field is built and
//! checked, so they are not part of its attribute snapshot. `validations`
//! accepts the pipe syntax or a structured object such as `{"min_length": 5}`.

use crate::application::RuleApplication;
use crate::error::{Result, ValidatorError};
use crate::field::{Attributes, InputField};
use crate::syntax::parse_rules;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

fn default_element() -> String {
    "input".to_string()
}

/// Attribute text for a JSON value. Null, arrays and objects have none.
fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

/// Rules declared on a layout field
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LayoutValidations {
    /// `"min_length(5)|required"`
    Syntax(String),
    /// `{"min_length": 5, "required": true}`
    Rules(RuleApplication),
}

impl LayoutValidations {
    /// Lower to a rule application
    pub fn to_application(&self) -> Result<RuleApplication> {
        match self {
            LayoutValidations::Syntax(text) => parse_rules(text),
            LayoutValidations::Rules(rules) => Ok(rules.clone()),
        }
    }
}

/// One field entry in a layout
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutField {
    /// HTML element to create (`input`, `select`, `textarea`, ...)
    #[serde(default = "default_element")]
    pub element: String,

    #[serde(default)]
    pub validations: Option<LayoutValidations>,

    #[serde(flatten)]
    pub attributes: IndexMap<String, JsonValue>,
}

impl LayoutField {
    /// The `name` attribute, stringified like every other attribute
    pub fn name(&self) -> Option<String> {
        self.attributes.get("name").and_then(scalar_text)
    }

    /// Attributes with every value in string form
    pub fn string_attributes(&self) -> Attributes {
        self.attributes
            .iter()
            .map(|(key, value)| {
                let value = scalar_text(value).unwrap_or_else(|| value.to_string());
                (key.clone(), value)
            })
            .collect()
    }
}

/// A parsed form layout
#[derive(Debug, Clone, Deserialize)]
pub struct FormLayout {
    #[serde(default)]
    pub fields: Vec<LayoutField>,
}

impl FormLayout {
    /// Parse a layout, checking that every field has a name
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: FormLayout = serde_json::from_str(json)?;

        if let Some(index) = layout.fields.iter().position(|f| f.name().is_none()) {
            return Err(ValidatorError::UnnamedLayoutField { index });
        }

        tracing::trace!(fields = layout.fields.len(), "parsed form layout");
        Ok(layout)
    }

    /// Create a field handle for every entry, in layout order
    pub fn generate(&self) -> Vec<InputField> {
        self.fields
            .iter()
            .filter_map(|field| InputField::from_attributes(field.string_attributes()))
            .collect()
    }

    /// Declared validations, as (field name, rules) in layout order
    pub fn validations(&self) -> Result<Vec<(String, RuleApplication)>> {
        self.fields
            .iter()
            .filter_map(|field| {
                let name = field.name()?;
                let validations = field.validations.as_ref()?;
                Some(validations.to_application().map(|rules| (name, rules)))
            })
            .collect()
    }
}
