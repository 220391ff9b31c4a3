// File: src/engine.rs
// Purpose: FormValidator, the public entry point tying the registries together

use crate::application::RuleApplication;
use crate::config::Config;
use crate::error::{Result, ValidatorError};
use crate::evaluator::Evaluator;
use crate::field::{Field, FieldHandle};
use crate::layout::FormLayout;
use crate::queue::PendingValidations;
use crate::registry::FieldRegistry;
use crate::rules::{Rule, RuleRegistry};
use crate::verdict::{AggregateVerdict, Verdict};
use indexmap::IndexMap;

/// A validator for one form
///
/// Each instance owns its fields, rules and pending validations; nothing is
/// shared between instances.
///
/// ```
/// use rusty_forms_validator::{FormValidator, InputField, RuleApplication};
///
/// let username = InputField::text("username").with_value("jack");
/// let mut form = FormValidator::with_fields([username.clone()]);
///
/// form.add_validation("username", RuleApplication::new().rule("min_length", 5));
/// let result = form.run_validations(false).unwrap();
/// assert!(!result.valid);
/// assert_eq!(result.messages, ["Field username must be at least length 5"]);
///
/// username.set_value("jackf");
/// assert!(form.run_validations(false).unwrap().valid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: FieldRegistry,
    rules: RuleRegistry,
    pending: PendingValidations,
}

impl FormValidator {
    /// Empty form with the built-in rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded with the given fields
    pub fn with_fields<H, I>(fields: I) -> Self
    where
        H: FieldHandle + 'static,
        I: IntoIterator<Item = H>,
    {
        let mut validator = Self::new();
        validator.add_fields(fields);
        validator
    }

    /// Form built from a JSON layout: every field is added and every
    /// declared validation is queued
    pub fn from_layout(layout: &FormLayout) -> Result<Self> {
        let mut validator = Self::with_fields(layout.generate());
        for (field, rules) in layout.validations()? {
            validator.add_validation(field, rules);
        }
        Ok(validator)
    }

    // ------------------------------------------------------------------
    // Fields
    // ------------------------------------------------------------------

    pub fn add_field<H: FieldHandle + 'static>(&mut self, handle: H) -> &Field {
        self.fields.register(handle)
    }

    pub fn add_fields<H, I>(&mut self, handles: I)
    where
        H: FieldHandle + 'static,
        I: IntoIterator<Item = H>,
    {
        self.fields.register_all(handles);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Validate one field immediately
    pub fn validate_field(&self, name: &str, rules: &RuleApplication) -> Result<Verdict> {
        self.evaluator().evaluate(name, rules)
    }

    /// Queue rules for a later [`run_validations`](Self::run_validations)
    pub fn add_validation(&mut self, name: impl Into<String>, rules: RuleApplication) {
        self.pending.queue(name, rules);
    }

    /// Queue rules written in pipe syntax, e.g. `"min_length(6)|required"`
    pub fn add_validation_str(&mut self, name: impl Into<String>, rules: &str) -> Result<()> {
        let rules: RuleApplication = rules.parse()?;
        self.add_validation(name, rules);
        Ok(())
    }

    /// Run every queued validation, optionally clearing the queue afterwards
    pub fn run_validations(&mut self, clear_after: bool) -> Result<AggregateVerdict> {
        let evaluator = Evaluator::new(&self.fields, &self.rules);
        self.pending.run(evaluator, clear_after)
    }

    pub fn pending_validations(&self) -> &IndexMap<String, RuleApplication> {
        self.pending.pending()
    }

    pub fn clear_pending_validations(&mut self) {
        self.pending.clear();
    }

    // ------------------------------------------------------------------
    // Rules
    // ------------------------------------------------------------------

    /// Add a rule, or replace an existing one
    pub fn add_validation_method(&mut self, name: impl Into<String>, rule: Rule) -> Result<()> {
        self.rules.register(name, rule)?;
        Ok(())
    }

    /// A copy of a registered rule, e.g. to change its message and save it back
    pub fn get_validation_method(&self, name: &str) -> Option<Rule> {
        self.rules.get(name).cloned()
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Apply message overrides, then queue declared validations
    pub fn apply_config(&mut self, config: &Config) -> Result<()> {
        for (name, message) in &config.messages {
            let rule = self
                .get_validation_method(name)
                .ok_or_else(|| ValidatorError::RuleNotFound { rule: name.clone() })?;
            tracing::warn!(rule = %name, %message, "overriding validation message from config");
            self.rules.register(name.clone(), rule.with_message(message.clone()))?;
        }

        for (field, rules) in config.rule_applications()? {
            self.add_validation(field, rules);
        }

        Ok(())
    }

    fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.fields, &self.rules)
    }
}
