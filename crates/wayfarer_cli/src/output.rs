//! Terminal output helpers — dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data
//! - `indicatif` for spinners

use std::sync::OnceLock;

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use crate::cli::OutputFormat;

static FORMAT: OnceLock<OutputFormat> = OnceLock::new();

/// Record the output format chosen on the command line. Call once, before
/// any printing.
pub fn init(format: OutputFormat) {
    let _ = FORMAT.set(format);
}

fn is_json() -> bool {
    matches!(FORMAT.get(), Some(OutputFormat::Json))
}

fn emit_json(level: &str, message: &str) {
    println!("{}", json!({ "level": level, "message": message }));
}

// ── Message helpers ────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", json!({ "level": "error", "message": text }));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Key-value pair with a styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        println!("{}", json!({ "level": "info", key: value }));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Body text unstyled (e.g. the advisor's reply).
pub fn plain(text: &str) {
    if is_json() {
        emit_json("reply", text);
    } else {
        println!("{text}");
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// A styled table for listing items.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

// ── Spinners ───────────────────────────────────────────────────────

/// A spinner for async operations.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Finish spinner with a success message.
pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.abandon();
    if is_json() {
        emit_json("success", message);
    } else {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Finish spinner with an error message.
pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.abandon();
    if is_json() {
        eprintln!("{}", json!({ "level": "error", "message": message }));
    } else {
        eprintln!("{} {}", style("✗").red(), message);
    }
}
