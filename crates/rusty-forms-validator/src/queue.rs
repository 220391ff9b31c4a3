// File: src/queue.rs
// Purpose: Validations that are queued now and run later as a batch

use crate::application::RuleApplication;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::verdict::AggregateVerdict;
use indexmap::IndexMap;

/// Field name -> accumulated rules, in the order fields were first queued
#[derive(Debug, Clone, Default)]
pub struct PendingValidations {
    pending: IndexMap<String, RuleApplication>,
}

impl PendingValidations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue rules for a field, merging into any rules already queued for it
    pub fn queue(&mut self, field_name: impl Into<String>, application: RuleApplication) {
        let field_name = field_name.into();
        match self.pending.get_mut(&field_name) {
            Some(existing) => {
                tracing::trace!(field = %field_name, rules = %application, "merging pending validations");
                existing.merge(application);
            }
            None => {
                tracing::trace!(field = %field_name, rules = %application, "queueing validations");
                self.pending.insert(field_name, application);
            }
        }
    }

    /// Read-only view of everything queued
    pub fn pending(&self) -> &IndexMap<String, RuleApplication> {
        &self.pending
    }

    /// Rules queued for one field
    pub fn get(&self, field_name: &str) -> Option<&RuleApplication> {
        self.pending.get(field_name)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Evaluate every queued field.
    ///
    /// The first configuration error (unknown rule or field) aborts the run
    /// and leaves the queue untouched. When `clear_after` is set the queue
    /// is emptied once all fields have been evaluated.
    pub fn run(&mut self, evaluator: Evaluator<'_>, clear_after: bool) -> Result<AggregateVerdict> {
        let fields = self
            .pending
            .iter()
            .map(|(name, application)| {
                evaluator
                    .evaluate(name, application)
                    .map(|verdict| (name.clone(), verdict))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        let aggregate = AggregateVerdict::from_fields(fields);
        tracing::debug!(
            fields = aggregate.fields.len(),
            failures = aggregate.messages.len(),
            valid = aggregate.valid,
            "ran pending validations"
        );

        if clear_after {
            self.clear();
        }

        Ok(aggregate)
    }
}
