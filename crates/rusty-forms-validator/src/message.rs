// File: src/message.rs
// Purpose: Placeholder substitution for rule messages

use crate::value::Argument;

/// Field name placeholder
pub const FIELD_TOKEN: &str = "%F";
/// Single argument placeholder
pub const ARG_TOKEN: &str = "%ARG";

/// Render a message template for a failed rule.
///
/// `%F` becomes the field name. A scalar argument replaces every `%ARG`; a
/// list replaces every `%ARGS[i]` with its i-th element. Tokens with no
/// matching argument are left as written.
pub fn format_message(template: &str, field_name: &str, args: &Argument) -> String {
    let message = template.replace(FIELD_TOKEN, field_name);

    match args {
        Argument::Scalar(arg) => message.replace(ARG_TOKEN, arg),
        Argument::List(items) => items
            .iter()
            .enumerate()
            .fold(message, |message, (i, item)| {
                message.replace(&format!("%ARGS[{}]", i), item)
            }),
    }
}
