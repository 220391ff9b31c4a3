// File: src/evaluator.rs
// Purpose: Run a rule application against one registered field

use crate::application::RuleApplication;
use crate::error::{Result, ValidatorError};
use crate::message::format_message;
use crate::registry::FieldRegistry;
use crate::rules::RuleRegistry;
use crate::verdict::Verdict;

/// Evaluates rules against fields, reading both registries
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    fields: &'a FieldRegistry,
    rules: &'a RuleRegistry,
}

impl<'a> Evaluator<'a> {
    pub fn new(fields: &'a FieldRegistry, rules: &'a RuleRegistry) -> Self {
        Self { fields, rules }
    }

    /// Validate `field_name` against every rule in `application`.
    ///
    /// Rules run in application order and each failure adds one formatted
    /// message. An unknown rule aborts the whole evaluation with
    /// [`ValidatorError::RuleNotFound`]; an unknown field yields
    /// [`ValidatorError::FieldNotFound`].
    pub fn evaluate(&self, field_name: &str, application: &RuleApplication) -> Result<Verdict> {
        let field = self
            .fields
            .get(field_name)
            .ok_or_else(|| ValidatorError::FieldNotFound {
                field: field_name.to_string(),
            })?;

        let value = field.current_value();
        let mut messages = Vec::new();

        for (rule_name, args) in application.iter() {
            let rule = self
                .rules
                .get(rule_name)
                .ok_or_else(|| ValidatorError::RuleNotFound {
                    rule: rule_name.to_string(),
                })?;

            if !rule.check(&value, args, field) {
                let message = format_message(rule.message(), field_name, args);
                tracing::debug!(field = %field_name, rule = %rule_name, %message, "rule failed");
                messages.push(message);
            }
        }

        Ok(Verdict::new(field.clone(), messages))
    }
}
