// File: src/application.rs
// Purpose: The set of rules (with arguments) to run against one field

use crate::value::Argument;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule name -> argument(s), evaluated in insertion order
///
/// ```
/// use rusty_forms_validator::RuleApplication;
///
/// let rules = RuleApplication::new()
///     .rule("min_length", 4)
///     .rule("length_between", [4, 6])
///     .rule("required", true);
/// assert_eq!(rules.to_string(), "min_length(4)|length_between(4,6)|required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleApplication {
    rules: IndexMap<String, Argument>,
}

impl RuleApplication {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn rule(mut self, name: impl Into<String>, args: impl Into<Argument>) -> Self {
        self.insert(name, args);
        self
    }

    /// Add a rule. An existing rule with the same name keeps its position
    /// but takes the new argument.
    pub fn insert(&mut self, name: impl Into<String>, args: impl Into<Argument>) -> Option<Argument> {
        self.rules.insert(name.into(), args.into())
    }

    /// Fold `other` into this set: new names are appended, shared names take
    /// `other`'s argument.
    pub fn merge(&mut self, other: RuleApplication) {
        self.rules.extend(other.rules);
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Argument)> {
        self.rules.iter().map(|(name, args)| (name.as_str(), args))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K: Into<String>, A: Into<Argument>> FromIterator<(K, A)> for RuleApplication {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        let mut rules = RuleApplication::new();
        for (name, args) in iter {
            rules.insert(name, args);
        }
        rules
    }
}

/// Renders the pipe-delimited form, e.g. `exact_length(5)|matches(jackf)`
impl fmt::Display for RuleApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, args)) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            match args {
                Argument::Scalar(s) if s == "true" => f.write_str(name)?,
                args => write!(f, "{}({})", name, args)?,
            }
        }
        Ok(())
    }
}
