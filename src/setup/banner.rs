//! Banner
//!
//! Opening and closing banners for the setup wizard.

use colored::Colorize;

const RULE_WIDTH: usize = 50;

/// Print the opening banner.
pub fn show_banner() {
    println!("{}", "=".repeat(RULE_WIDTH).cyan());
    println!("{}", "faker-news Setup".cyan().bold());
    println!("{}", "=".repeat(RULE_WIDTH).cyan());
    println!();
}

/// Print the completion banner.
pub fn show_completion() {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH).cyan());
    println!("{}", "Setup Complete!".green().bold());
    println!("{}", "=".repeat(RULE_WIDTH).cyan());
    println!();
}
