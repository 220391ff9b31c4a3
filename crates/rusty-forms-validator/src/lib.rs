//! # rusty-forms-validator
//!
//! Declarative form validation for the rusty-forms stack.
//!
//! Fields are registered by name, rules are looked up by name, and failures
//! come back as formatted messages:
//!
//! - **Immediate**: [`FormValidator::validate_field`] checks one field now.
//! - **Pending**: [`FormValidator::add_validation`] queues rules, merging
//!   with anything already queued for the field, and
//!   [`FormValidator::run_validations`] checks the whole queue at once.
//!
//! Built-in rules are `min_length`, `max_length`, `required`,
//! `length_between` and `matches`. Custom rules are any
//! [`RulePredicate`] (closures included) plus a message template using the
//! `%F`, `%ARG` and `%ARGS[i]` placeholders.
//!
//! ## Example
//!
//! ```
//! use rusty_forms_validator::{FormValidator, InputField, RuleApplication};
//!
//! let email = InputField::text("email");
//! let username = InputField::text("username").with_value("jack");
//! let mut form = FormValidator::with_fields([username, email]);
//!
//! form.add_validation("username", RuleApplication::new().rule("min_length", 5));
//! form.add_validation_str("email", "required").unwrap();
//!
//! let result = form.run_validations(true).unwrap();
//! assert!(!result.valid);
//! assert_eq!(
//!     result.messages,
//!     ["Field username must be at least length 5", "Field email is required"]
//! );
//! assert!(form.pending_validations().is_empty());
//! ```
//!
//! Referencing a rule that does not exist is a programming error and is
//! returned as [`ValidatorError::RuleNotFound`], never as a failed verdict.

pub mod application;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod layout;
pub mod message;
pub mod queue;
pub mod registry;
pub mod rules;
pub mod syntax;
pub mod value;
pub mod verdict;

pub use application::RuleApplication;
pub use config::Config;
pub use engine::FormValidator;
pub use error::{Result, ValidatorError};
pub use evaluator::Evaluator;
pub use field::{Attributes, Field, FieldHandle, FieldKind, InputField};
pub use layout::FormLayout;
pub use message::format_message;
pub use queue::PendingValidations;
pub use registry::FieldRegistry;
pub use rules::{Rule, RulePredicate, RuleRegistry};
pub use syntax::parse_rules;
pub use value::{Argument, FieldValue};
pub use verdict::{AggregateVerdict, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
