use anyhow::Result;
use colored::Colorize;
use rusty_forms_validator::FormValidator;
use std::path::Path;

pub fn execute(config: Option<&Path>) -> Result<()> {
    let config = super::load_config(config)?;
    let mut form = FormValidator::new();
    form.apply_config(&config)?;

    println!("{}", "Validation methods:".green().bold());
    for (name, rule) in form.rules().iter() {
        println!("  {:<16} {}", name.cyan(), rule.message());
    }

    Ok(())
}
