//! Built-in rules
//!
//! Lengths are counted in characters and all bounds are inclusive. A rule
//! given a malformed argument (non-numeric length, a list where a single
//! value is expected) fails rather than panicking.

use super::{Rule, RulePredicate};
use crate::field::Field;
use crate::value::{Argument, FieldValue};

pub const MIN_LENGTH: &str = "min_length";
pub const MAX_LENGTH: &str = "max_length";
pub const REQUIRED: &str = "required";
pub const LENGTH_BETWEEN: &str = "length_between";
pub const MATCHES: &str = "matches";

/// `len(value) >= arg`
#[derive(Debug, Clone, Copy)]
pub struct MinLength;

/// `len(value) <= arg`
#[derive(Debug, Clone, Copy)]
pub struct MaxLength;

/// Non-empty text, or a checked checkbox / radio button
#[derive(Debug, Clone, Copy)]
pub struct Required;

/// `args[0] <= len(value) <= args[1]`
#[derive(Debug, Clone, Copy)]
pub struct LengthBetween;

/// Exact equality with the argument
#[derive(Debug, Clone, Copy)]
pub struct Matches;

fn length(value: &FieldValue) -> Option<f64> {
    value.char_len().map(|len| len as f64)
}

impl RulePredicate for MinLength {
    fn evaluate(&self, value: &FieldValue, args: &Argument, _field: &Field) -> bool {
        match (length(value), args.number_at(0)) {
            (Some(len), Some(min)) => len >= min,
            _ => false,
        }
    }
}

impl RulePredicate for MaxLength {
    fn evaluate(&self, value: &FieldValue, args: &Argument, _field: &Field) -> bool {
        match (length(value), args.number_at(0)) {
            (Some(len), Some(max)) => len <= max,
            _ => false,
        }
    }
}

impl RulePredicate for Required {
    fn evaluate(&self, value: &FieldValue, _args: &Argument, _field: &Field) -> bool {
        value.is_present()
    }
}

impl RulePredicate for LengthBetween {
    fn evaluate(&self, value: &FieldValue, args: &Argument, _field: &Field) -> bool {
        match (length(value), args.number_at(0), args.number_at(1)) {
            (Some(len), Some(min), Some(max)) => min <= len && len <= max,
            _ => false,
        }
    }
}

impl RulePredicate for Matches {
    fn evaluate(&self, value: &FieldValue, args: &Argument, _field: &Field) -> bool {
        match (value.as_text(), args) {
            (Some(text), Argument::Scalar(expected)) => text == expected,
            _ => false,
        }
    }
}

/// The rules every registry starts with, in registration order
pub fn builtin_rules() -> Vec<(&'static str, Rule)> {
    vec![
        (
            MIN_LENGTH,
            Rule::new(MinLength, "Field %F must be at least length %ARG"),
        ),
        (
            MAX_LENGTH,
            Rule::new(MaxLength, "Field %F must be a maximum of %ARG characters"),
        ),
        (REQUIRED, Rule::new(Required, "Field %F is required")),
        (
            LENGTH_BETWEEN,
            Rule::new(
                LengthBetween,
                "Field %F must be a minimum of %ARGS[0] characters and a maximum of %ARGS[1]",
            ),
        ),
        (MATCHES, Rule::new(Matches, "Field %F must match %ARG")),
    ]
}
