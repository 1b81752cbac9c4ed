//! Styled terminal output utilities.

use owo_colors::OwoColorize;

/// Print a header/title
pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
    println!();
}

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a key and an optional value
pub fn kv_opt(key: &str, value: Option<&str>) {
    match value {
        Some(value) => kv(key, value),
        None => println!("  {}: {}", key.dimmed(), "(unknown)".yellow()),
    }
}

/// Print a success message
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a list item
pub fn list_item(text: &str) {
    println!("  {} {}", "•".dimmed(), text);
}

/// Print a newline
pub fn newline() {
    println!();
}

/// Print dimmed text
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// Print a bare value, for output meant to be piped
pub fn plain(text: &str) {
    println!("{}", text);
}
