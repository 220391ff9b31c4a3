use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use rusty_forms_validator::{AggregateVerdict, FieldHandle, FieldValue, FormLayout, FormValidator};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Validate a layout's fields and return whether everything passed
pub fn execute(
    layout_path: &Path,
    values_path: Option<&Path>,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<bool> {
    let verdict = validate(layout_path, values_path, config_path)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&verdict)?),
        OutputFormat::Text => print_report(&verdict),
    }

    Ok(verdict.valid)
}

/// Build the form from a layout, seed values, apply config and run
pub fn validate(
    layout_path: &Path,
    values_path: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<AggregateVerdict> {
    let layout_json = fs::read_to_string(layout_path)
        .with_context(|| format!("Failed to read layout file: {:?}", layout_path))?;
    let layout = FormLayout::from_json(&layout_json)
        .with_context(|| format!("Failed to load layout: {:?}", layout_path))?;

    let fields = layout.generate();

    if let Some(values_path) = values_path {
        let values = load_values(values_path)?;
        for (name, value) in values {
            // A repeated name registers its last entry, so seed that one
            let Some(field) = fields.iter().rfind(|f| f.name() == name) else {
                bail!("Value given for unknown field `{}`", name);
            };
            match value {
                FieldValue::Text(text) => field.set_value(text),
                FieldValue::Checked(checked) => field.set_checked(checked),
            }
        }
    }

    let mut form = FormValidator::with_fields(fields);
    for (name, rules) in layout.validations()? {
        form.add_validation(name, rules);
    }

    let config = super::load_config(config_path)?;
    form.apply_config(&config)?;

    tracing::debug!(pending = form.pending_validations().len(), "running validations");
    Ok(form.run_validations(config.run.clear_after)?)
}

fn load_values(path: &Path) -> Result<BTreeMap<String, FieldValue>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse values file: {:?}", path))
}

fn print_report(verdict: &AggregateVerdict) {
    for (name, field) in &verdict.fields {
        if field.valid {
            println!("{} {}", "✓".green(), name);
        } else {
            println!("{} {}", "✗".red(), name.bold());
            for message in &field.messages {
                println!("    {}", message);
            }
        }
    }

    println!();
    if verdict.valid {
        println!("{}", "Form is valid".green().bold());
    } else {
        println!(
            "{}",
            format!("{} validation error(s)", verdict.messages.len()).red().bold()
        );
    }
}
