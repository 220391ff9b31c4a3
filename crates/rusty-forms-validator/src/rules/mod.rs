//! Rule registry
//!
//! Every engine owns its own registry. It starts with the built-in rules and
//! can be extended, or have built-ins replaced, at any time. Rules are looked
//! up by name when a [`RuleApplication`](crate::RuleApplication) is evaluated.

use crate::error::{Result, ValidatorError};
use crate::field::Field;
use crate::value::{Argument, FieldValue};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

pub mod builtin;

/// The check a rule performs
///
/// Implemented by the built-in rules and, through the blanket impl, by any
/// closure `Fn(&FieldValue, &Argument, &Field) -> bool`.
pub trait RulePredicate {
    /// Returns `true` when `value` passes the rule
    fn evaluate(&self, value: &FieldValue, args: &Argument, field: &Field) -> bool;
}

impl<F> RulePredicate for F
where
    F: Fn(&FieldValue, &Argument, &Field) -> bool,
{
    fn evaluate(&self, value: &FieldValue, args: &Argument, field: &Field) -> bool {
        self(value, args, field)
    }
}

/// A named check plus the message template shown when it fails
///
/// Cloning is cheap; the predicate is shared. To change a rule's message,
/// fetch it, call [`with_message`](Rule::with_message) and register it again.
#[derive(Clone)]
pub struct Rule {
    predicate: Rc<dyn RulePredicate>,
    message: String,
}

impl Rule {
    pub fn new(predicate: impl RulePredicate + 'static, message: impl Into<String>) -> Self {
        Self {
            predicate: Rc::new(predicate),
            message: message.into(),
        }
    }

    /// Message template (`%F`, `%ARG`, `%ARGS[i]` placeholders)
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Same predicate, different message template
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Run the predicate
    pub fn check(&self, value: &FieldValue, args: &Argument, field: &Field) -> bool {
        self.predicate.evaluate(value, args, field)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Named rules available to one engine instance
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: IndexMap<String, Rule>,
}

impl RuleRegistry {
    /// Registry seeded with the built-in rules
    pub fn new() -> Self {
        let rules = builtin::builtin_rules()
            .into_iter()
            .map(|(name, rule)| (name.to_string(), rule))
            .collect();
        Self { rules }
    }

    /// Registry with no rules at all
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Install a rule, replacing any rule already registered under `name`.
    ///
    /// Returns the replaced rule, if there was one.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) -> Result<Option<Rule>> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidatorError::EmptyRuleName);
        }
        tracing::trace!(rule = %name, "registering validation method");
        Ok(self.rules.insert(name, rule))
    }

    /// Shorthand for registering a predicate and message
    pub fn define(
        &mut self,
        name: impl Into<String>,
        predicate: impl RulePredicate + 'static,
        message: impl Into<String>,
    ) -> Result<Option<Rule>> {
        self.register(name, Rule::new(predicate, message))
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Rule names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
