//! Terminal output for the self-test report.
//!
//! Symbols and labels are colored only when stdout supports it, unless the
//! user forced a choice with `--color`.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

use super::command::ColorChoice;

/// Apply the `--color` flag globally.
pub fn configure(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

/// Print a section header.
pub fn section(title: &str) {
    println!(
        "{}",
        format!("=== {title} ===").if_supports_color(Stream::Stdout, |t| t.bold())
    );
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!(
        "{} {}",
        format!("{label}:").if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// Print a plain line.
pub fn line(text: impl Display) {
    println!("{text}");
}

pub fn blank() {
    println!();
}

/// Print a success line.
pub fn success(message: &str) {
    println!(
        "{} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        message
    );
}

/// Print a failure line. Stays on stdout so the report reads top to bottom.
pub fn failure(message: &str) {
    println!(
        "{} {}",
        "×".if_supports_color(Stream::Stdout, |t| t.red()),
        message
    );
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}
