// File: src/syntax.rs
// Purpose: Pipe-delimited rule syntax, e.g. "min_length(6)|required"

use crate::application::RuleApplication;
use crate::error::{Result, ValidatorError};
use crate::value::Argument;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

// name, optionally followed by a parenthesised argument list
static RULE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:\(([^()]*)\))?\s*$").unwrap()
});

/// Parse `name(arg,...)|name|...` into a [`RuleApplication`].
///
/// `required` and `required()` take the flag argument `true`, one argument
/// becomes a scalar and two or more become a list. A blank string yields an
/// empty application.
pub fn parse_rules(input: &str) -> Result<RuleApplication> {
    let mut rules = RuleApplication::new();
    if input.trim().is_empty() {
        return Ok(rules);
    }

    for segment in input.split('|') {
        let (name, args) = parse_segment(input, segment)?;
        rules.insert(name, args);
    }

    Ok(rules)
}

fn parse_segment(input: &str, segment: &str) -> Result<(String, Argument)> {
    let captures = RULE_SEGMENT
        .captures(segment)
        .ok_or_else(|| ValidatorError::InvalidRuleSyntax {
            input: input.to_string(),
            reason: if segment.trim().is_empty() {
                "empty rule".to_string()
            } else {
                format!("cannot parse `{}`", segment.trim())
            },
        })?;

    let name = captures[1].to_string();
    let args = match captures.get(2).map(|m| m.as_str().trim()) {
        None | Some("") => Argument::flag(),
        Some(raw) => {
            let mut parts: Vec<String> = raw.split(',').map(|p| p.trim().to_string()).collect();
            if parts.len() == 1 {
                Argument::Scalar(parts.remove(0))
            } else {
                Argument::List(parts)
            }
        }
    };

    Ok((name, args))
}

impl FromStr for RuleApplication {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rules(s)
    }
}
