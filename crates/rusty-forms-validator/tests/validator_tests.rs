//! Integration tests for rusty-forms-validator
//!
//! Exercises the public `FormValidator` API end to end:
//! - Field registration and lookup
//! - Immediate validation with the built-in rules
//! - Custom rules and message overrides
//! - Pending validations (merge, run, clear)
//! - Layouts and configuration

use pretty_assertions::assert_eq;
use rusty_forms_validator::*;

fn username_form(value: &str) -> (FormValidator, InputField) {
    let username = InputField::text("username").with_value(value);
    let form = FormValidator::with_fields([username.clone()]);
    (form, username)
}

fn rules(text: &str) -> RuleApplication {
    text.parse().unwrap()
}

// ============================================================================
// Fields
// ============================================================================

#[test]
fn test_fields_passed_on_creation() {
    let form = FormValidator::with_fields([InputField::text("email").with_attr("class", "emailField")]);
    let field = form.field("email").unwrap();
    assert_eq!(field.attr("class"), Some("emailField"));
}

#[test]
fn test_add_multiple_fields() {
    let mut form = FormValidator::new();
    form.add_fields([
        InputField::text("username").with_attr("class", "userField"),
        InputField::text("email").with_attr("class", "emailField"),
    ]);
    assert!(form.field("email").is_some());
    assert_eq!(form.field("username").unwrap().attr("type"), Some("text"));
}

#[test]
fn test_clear_fields() {
    let (mut form, _) = username_form("jackf");
    form.clear_fields();
    assert!(form.field("username").is_none());
    assert!(matches!(
        form.validate_field("username", &rules("required")),
        Err(ValidatorError::FieldNotFound { .. })
    ));
}

#[test]
fn test_two_instances_coexist() {
    let form_one = FormValidator::with_fields([InputField::text("email")]);
    let form_two = FormValidator::with_fields([InputField::text("firstName")]);

    assert!(form_one.field("email").is_some());
    assert!(form_one.field("firstName").is_none());
    assert!(form_two.field("firstName").is_some());
    assert!(form_two.field("email").is_none());
}

// ============================================================================
// Immediate validation
// ============================================================================

#[test]
fn test_min_length_message() {
    let (form, _) = username_form("j");
    let verdict = form.validate_field("username", &rules("min_length(5)")).unwrap();
    assert!(!verdict.valid);
    assert_eq!(verdict.messages, vec!["Field username must be at least length 5"]);
}

#[test]
fn test_max_length_message() {
    let (form, _) = username_form("jackf");
    assert!(form.validate_field("username", &rules("max_length(6)")).unwrap().valid);

    let verdict = form.validate_field("username", &rules("max_length(4)")).unwrap();
    assert_eq!(verdict.messages, vec!["Field username must be a maximum of 4 characters"]);
}

#[test]
fn test_required_treats_zero_as_present() {
    let (form, username) = username_form("0");
    assert!(form.validate_field("username", &rules("required")).unwrap().valid);

    username.set_value("");
    let verdict = form.validate_field("username", &rules("required")).unwrap();
    assert!(!verdict.valid);
    assert_eq!(verdict.messages, vec!["Field username is required"]);
}

#[test]
fn test_required_on_checkbox_uses_checked_state() {
    let terms = InputField::checkbox("terms").with_value("yes");
    let form = FormValidator::with_fields([terms.clone()]);
    let required = RuleApplication::new().rule("required", true);

    let verdict = form.validate_field("terms", &required).unwrap();
    assert_eq!(verdict.messages, vec!["Field terms is required"]);

    terms.set_checked(true);
    assert!(form.validate_field("terms", &required).unwrap().valid);
}

#[test]
fn test_length_between_placeholders() {
    let (form, _) = username_form("jackf");
    let between = RuleApplication::new().rule("length_between", [4, 6]);
    assert!(form.validate_field("username", &between).unwrap().valid);

    let (form, _) = username_form("jackfranklin");
    let verdict = form.validate_field("username", &between).unwrap();
    assert_eq!(
        verdict.messages,
        vec!["Field username must be a minimum of 4 characters and a maximum of 6"]
    );
}

#[test]
fn test_matches() {
    let (form, _) = username_form("jackf");
    assert!(form.validate_field("username", &rules("matches(jackf)")).unwrap().valid);

    let (form, _) = username_form("jackfranklin");
    let verdict = form.validate_field("username", &rules("matches(jack)")).unwrap();
    assert_eq!(verdict.messages, vec!["Field username must match jack"]);
}

#[test]
fn test_unknown_rule_is_an_error_not_a_verdict() {
    let (form, _) = username_form("jackf");
    let err = form
        .validate_field("username", &RuleApplication::new().rule("blahblah", true))
        .unwrap_err();
    assert_eq!(err.to_string(), "Validation method blahblah does not exist");
}

#[test]
fn test_multiple_rules() {
    let (form, username) = username_form("jackf");
    let min_max = RuleApplication::new().rule("min_length", 4).rule("max_length", 7);
    assert!(form.validate_field("username", &min_max).unwrap().valid);

    username.set_value("jackfranklin");
    let verdict = form.validate_field("username", &min_max).unwrap();
    assert!(!verdict.valid);
    assert_eq!(verdict.messages, vec!["Field username must be a maximum of 7 characters"]);

    let verdict = form
        .validate_field("username", &rules("max_length(5)|matches(jackf)"))
        .unwrap();
    assert_eq!(
        verdict.messages,
        vec![
            "Field username must be a maximum of 5 characters",
            "Field username must match jackf",
        ]
    );
}

#[test]
fn test_validation_is_idempotent() {
    let (form, _) = username_form("jackfranklin");
    let application = rules("max_length(5)|matches(jackf)");
    let first = form.validate_field("username", &application).unwrap();
    let second = form.validate_field("username", &application).unwrap();
    assert_eq!(first.valid, second.valid);
    assert_eq!(first.messages, second.messages);
}

// ============================================================================
// Custom rules
// ============================================================================

fn exact_length_rule() -> Rule {
    Rule::new(
        |value: &FieldValue, args: &Argument, _: &Field| {
            match (value.char_len(), args.number_at(0)) {
                (Some(len), Some(expected)) => len as f64 == expected,
                _ => false,
            }
        },
        "Field %F has to be %ARG characters",
    )
}

#[test]
fn test_user_defined_rule() {
    let (mut form, username) = username_form("jackf");
    form.add_validation_method("exact_length", exact_length_rule()).unwrap();
    assert!(form.validate_field("username", &rules("exact_length(5)")).unwrap().valid);

    username.set_value("jackfranklin");
    let verdict = form.validate_field("username", &rules("exact_length(5)")).unwrap();
    assert_eq!(verdict.messages, vec!["Field username has to be 5 characters"]);
}

#[test]
fn test_custom_rule_sees_field_attributes() {
    let code = InputField::text("code").with_attr("data-prefix", "RF-").with_value("RF-123");
    let mut form = FormValidator::with_fields([code]);
    form.add_validation_method(
        "has_prefix",
        Rule::new(
            |value: &FieldValue, _: &Argument, field: &Field| {
                match (value.as_text(), field.attr("data-prefix")) {
                    (Some(text), Some(prefix)) => text.starts_with(prefix),
                    _ => false,
                }
            },
            "Field %F has the wrong prefix",
        ),
    )
    .unwrap();
    assert!(form.validate_field("code", &rules("has_prefix")).unwrap().valid);
}

#[test]
fn test_edit_builtin_message() {
    let (mut form, _) = username_form("jack");
    let min_length = form
        .get_validation_method("min_length")
        .unwrap()
        .with_message("Field %F has to be at least %ARG characters");
    form.add_validation_method("min_length", min_length).unwrap();

    let verdict = form.validate_field("username", &rules("min_length(5)")).unwrap();
    assert_eq!(verdict.messages, vec!["Field username has to be at least 5 characters"]);
}

#[test]
fn test_rule_change_does_not_alter_returned_verdict() {
    let (mut form, _) = username_form("jack");
    let before = form.validate_field("username", &rules("min_length(5)")).unwrap();

    let rule = form.get_validation_method("min_length").unwrap().with_message("changed");
    form.add_validation_method("min_length", rule).unwrap();

    assert_eq!(before.messages, vec!["Field username must be at least length 5"]);
}

// ============================================================================
// Pending validations
// ============================================================================

#[test]
fn test_pending_run_reports_failures() {
    let (mut form, _) = username_form("jackf");
    form.add_validation_method("exact_length", exact_length_rule()).unwrap();
    form.add_validation("username", rules("exact_length(5)"));
    form.add_validation("email", rules("required"));
    form.add_field(InputField::text("email").with_attr("class", "emailField"));

    let result = form.run_validations(false).unwrap();
    assert!(!result.valid);
    assert_eq!(result.messages, vec!["Field email is required"]);
    assert!(result.field("username").unwrap().valid);
    assert!(!result.field("email").unwrap().valid);
}

#[test]
fn test_same_field_queued_twice() {
    let (mut form, username) = username_form("jackf");
    form.add_validation_method("exact_length", exact_length_rule()).unwrap();
    form.add_validation("username", RuleApplication::new().rule("exact_length", 5));
    form.add_validation("username", RuleApplication::new().rule("matches", "jackf"));

    assert_eq!(
        form.pending_validations()["username"],
        RuleApplication::new().rule("exact_length", 5).rule("matches", "jackf")
    );
    assert!(form.run_validations(false).unwrap().valid);

    username.set_value("jackfranklin");
    let result = form.run_validations(false).unwrap();
    assert!(!result.valid);
    assert_eq!(result.messages.len(), 2);

    username.set_value("jackd");
    let result = form.run_validations(false).unwrap();
    assert!(!result.valid);
    assert_eq!(result.messages, vec!["Field username must match jackf"]);
}

#[test]
fn test_pending_validations_snapshot() {
    let mut form = FormValidator::new();
    form.add_validation("username", rules("exact_length(5)"));
    form.add_validation("email", rules("required"));

    let pending = form.pending_validations();
    assert_eq!(pending["username"].to_string(), "exact_length(5)");
    assert_eq!(pending["email"].to_string(), "required");
}

#[test]
fn test_clear_flag() {
    let (mut form, _) = username_form("jackf");
    form.add_validation("username", rules("min_length(4)"));
    form.add_validation("username", rules("matches(jackf)"));

    form.run_validations(false).unwrap();
    assert_eq!(
        form.pending_validations()["username"].to_string(),
        "min_length(4)|matches(jackf)"
    );

    let result = form.run_validations(true).unwrap();
    assert!(result.valid);
    assert!(result.field("username").is_some());
    assert!(form.pending_validations().get("username").is_none());
}

#[test]
fn test_clear_pending_validations() {
    let mut form = FormValidator::new();
    form.add_validation("username", rules("required"));
    form.clear_pending_validations();
    assert!(form.pending_validations().is_empty());
    assert!(form.run_validations(false).unwrap().valid);
}

#[test]
fn test_unknown_rule_aborts_run() {
    let (mut form, _) = username_form("");
    form.add_field(InputField::text("email"));
    form.add_validation("email", rules("required"));
    form.add_validation("username", rules("blahblah"));

    let err = form.run_validations(true).unwrap_err();
    assert!(matches!(err, ValidatorError::RuleNotFound { ref rule } if rule == "blahblah"));
}

#[test]
fn test_end_to_end_message_order() {
    let mut form = FormValidator::new();
    form.add_field(InputField::text("email"));
    form.add_field(InputField::text("username").with_value("jack"));

    form.add_validation("username", RuleApplication::new().rule("min_length", 5));
    form.add_validation("email", RuleApplication::new().rule("required", true));

    let result = form.run_validations(false).unwrap();
    assert!(!result.valid);
    assert_eq!(
        result.messages,
        vec!["Field username must be at least length 5", "Field email is required"]
    );
    assert!(!result.fields["email"].valid);
    assert!(!result.fields["username"].valid);
}

// ============================================================================
// Layouts and configuration
// ============================================================================

#[test]
fn test_form_from_layout() {
    let layout = FormLayout::from_json(
        r#"{ "fields": [
            { "element": "input", "type": "text", "name": "username", "class": "testClass",
              "value": "jackfranklin", "validations": "min_length(5)|max_length(8)" },
            { "element": "input", "type": "text", "name": "email",
              "validations": { "required": true } }
        ]}"#,
    )
    .unwrap();
    let mut form = FormValidator::from_layout(&layout).unwrap();
    assert_eq!(form.field("username").unwrap().attr("class"), Some("testClass"));

    let result = form.run_validations(false).unwrap();
    assert_eq!(
        result.messages,
        vec![
            "Field username must be a maximum of 8 characters",
            "Field email is required",
        ]
    );
}

#[test]
fn test_apply_config() {
    let config = Config::parse(
        r#"
        [messages]
        min_length = "Field %F has to be at least %ARG characters"

        [validations]
        username = "min_length(6)|required"
        shortname = { max_length = 5 }
        "#,
    )
    .unwrap();

    let mut form = FormValidator::with_fields([
        InputField::text("username").with_value("jack"),
        InputField::text("shortname").with_value("abcdefg"),
    ]);
    form.apply_config(&config).unwrap();

    let result = form.run_validations(config.run.clear_after).unwrap();
    assert_eq!(
        result.messages,
        vec![
            "Field username has to be at least 6 characters",
            "Field shortname must be a maximum of 5 characters",
        ]
    );
    assert_eq!(form.pending_validations().len(), 2);
}

#[test]
fn test_aggregate_serializes_to_json() {
    let (mut form, _) = username_form("");
    form.add_validation("username", rules("required"));
    let result = form.run_validations(false).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], serde_json::json!(false));
    assert_eq!(json["fields"]["username"]["field"], serde_json::json!("username"));
    assert_eq!(json["messages"][0], serde_json::json!("Field username is required"));
}
