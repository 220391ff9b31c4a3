// File: src/value.rs
// Purpose: Field values and rule arguments

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Current value of a field as seen by a rule
///
/// Text-like inputs report their string content; checkboxes and radio
/// buttons report whether they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
}

impl FieldValue {
    /// String content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Checked(_) => None,
        }
    }

    /// Length in characters (not bytes). Checked values have no length.
    pub fn char_len(&self) -> Option<usize> {
        self.as_text().map(|s| s.chars().count())
    }

    /// Whether the value counts as "present": non-empty text, or checked
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Checked(checked) => *checked,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Checked(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Checked(b)
    }
}

/// Argument(s) given to a rule
///
/// Single-argument rules (`min_length: 5`) take a scalar; multi-argument
/// rules (`length_between: [4, 6]`) take an ordered list. Values are kept in
/// their string form, exactly as they are substituted into messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Scalar(String),
    List(Vec<String>),
}

impl Argument {
    /// The argument used by flag-style rules such as `required`
    pub fn flag() -> Self {
        Argument::Scalar("true".to_string())
    }

    /// Argument at `index`. A scalar only has index 0.
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            Argument::Scalar(s) if index == 0 => Some(s),
            Argument::Scalar(_) => None,
            Argument::List(items) => items.get(index).map(String::as_str),
        }
    }

    /// Numeric form of the argument at `index`
    pub fn number_at(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(|s| s.trim().parse::<f64>().ok())
    }

    /// Number of argument values
    pub fn len(&self) -> usize {
        match self {
            Argument::Scalar(_) => 1,
            Argument::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Scalar(s) => f.write_str(s),
            Argument::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Scalar(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Scalar(s)
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Argument::Scalar(b.to_string())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(n: $ty) -> Self {
                    Argument::Scalar(n.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize, f64);

impl<T: ToString> From<Vec<T>> for Argument {
    fn from(items: Vec<T>) -> Self {
        Argument::List(items.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for Argument {
    fn from(items: [T; N]) -> Self {
        Argument::List(items.iter().map(ToString::to_string).collect())
    }
}

impl Serialize for Argument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Argument::Scalar(s) => serializer.serialize_str(s),
            Argument::List(items) => items.serialize(serializer),
        }
    }
}

/// Scalar as it appears in JSON / TOML input
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawScalar {
    fn into_string(self) -> String {
        match self {
            RawScalar::Bool(b) => b.to_string(),
            RawScalar::Int(n) => n.to_string(),
            RawScalar::Float(n) => n.to_string(),
            RawScalar::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawArgument {
    List(Vec<RawScalar>),
    Scalar(RawScalar),
}

impl<'de> Deserialize<'de> for Argument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawArgument::deserialize(deserializer)? {
            RawArgument::List(items) => {
                Argument::List(items.into_iter().map(RawScalar::into_string).collect())
            }
            RawArgument::Scalar(scalar) => Argument::Scalar(scalar.into_string()),
        })
    }
}
