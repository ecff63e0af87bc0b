//! Prompts
//!
//! Interactive terminal prompts for the setup wizard.
//! Uses the `dialoguer` crate for input handling.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password};

use crate::types::Provider;

/// Ask a yes/no question. Defaults to no.
pub fn confirm(label: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(label)
        .default(false)
        .interact()?)
}

/// Prompt for the provider choice. Closed set, case-insensitive,
/// defaults to openai. Repeats until a valid name is entered.
pub fn prompt_provider() -> Result<Provider> {
    loop {
        let value: String = Input::new()
            .with_prompt("Which provider? [openai/dashscope]")
            .default("openai".to_string())
            .interact_text()?;

        if let Some(provider) = Provider::parse(&value) {
            return Ok(provider);
        }
        println!(
            "{}",
            "Please choose \"openai\" or \"dashscope\".".yellow()
        );
    }
}

/// Prompt for an API key with echo suppressed.
pub fn prompt_secret(provider: Provider) -> Result<String> {
    Ok(Password::new()
        .with_prompt(format!("Enter your {} API key", provider.label()))
        .interact()?)
}

/// Green check line for a positive discovery result.
pub fn print_found(message: &str) {
    println!("{}", format!("✓ {}", message).green());
}

/// Yellow warning line.
pub fn print_warning(message: &str) {
    println!("{}", format!("⚠ {}", message).yellow());
}

/// Red cross line for a recoverable failure.
pub fn print_failure(message: &str) {
    println!("{}", format!("✗ {}", message).red());
}
