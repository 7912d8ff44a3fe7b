//! Terminal output for the coinrelay CLI.
//!
//! Human mode prints Astral-style status lines (colored symbols, dimmed
//! labels). With `--json` every line becomes one flat JSON event on its own
//! line, e.g. `{"event":"setting","name":"Top","value":"5"}`, and `--quiet`
//! hides everything except warnings and errors.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Output mode selected by the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Human-readable informational lines are printed.
    const fn shows_info(self) -> bool {
        !self.json && !self.quiet
    }
}

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

fn mode() -> OutputConfig {
    OUTPUT.get().copied().unwrap_or_default()
}

/// Set the output mode. Only the first call per process takes effect.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT.set(config);
}

#[must_use]
pub fn is_json() -> bool {
    mode().json
}

#[must_use]
pub fn is_quiet() -> bool {
    mode().quiet
}

#[must_use]
pub fn verbosity() -> u8 {
    mode().verbose
}

/// Build a flat JSON event: `event` plus the given fields.
fn event(kind: &str, fields: Value) -> Value {
    let mut event = json!({ "event": kind });
    if let (Some(target), Value::Object(fields)) = (event.as_object_mut(), fields) {
        target.extend(fields);
    }
    event
}

/// Print an informational line: as a JSON event, or via `human` unless quiet.
fn info_line(kind: &str, fields: Value, human: impl FnOnce()) {
    let config = mode();
    if config.json {
        println!("{}", event(kind, fields));
    } else if config.shows_info() {
        human();
    }
}

/// Startup banner with the crate version.
pub fn header(version: &str) {
    info_line(
        "startup",
        json!({ "app": "coinrelay", "version": version }),
        || println!("{} {}\n", "coinrelay".bold(), version.dimmed()),
    );
}

/// A labeled setting or result value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    info_line(
        "setting",
        json!({ "name": label, "value": value }),
        || println!("  {:<12} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    info_line(
        "status",
        json!({ "level": "ok", "message": message }),
        || println!("  {} {}", "✓".green(), message),
    );
}

/// Warnings are shown even in quiet mode.
pub fn warning(message: &str) {
    if is_json() {
        println!(
            "{}",
            event("status", json!({ "level": "warning", "message": message }))
        );
    } else {
        println!("  {} {}", "⚠".yellow(), message);
    }
}

/// Errors go to stderr in every mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", event("error", json!({ "message": message })));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Section title. JSON mode has no sections.
pub fn section(title: &str) {
    if mode().shows_info() {
        println!("\n{}", title.bold());
    }
}

pub fn hint(message: &str) {
    info_line("hint", json!({ "message": message }), || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

/// A step that has started, e.g. "Verifying bot token...".
pub fn action(verb: &str, target: &str) {
    info_line(
        "step",
        json!({ "verb": verb, "target": target, "done": false }),
        || println!("  {} {}...", verb.bold().cyan(), target),
    );
}

/// A step that has finished, e.g. "✓ Verified bot token".
pub fn action_done(verb: &str, target: &str) {
    info_line(
        "step",
        json!({ "verb": verb, "target": target, "done": true }),
        || println!("  {} {} {}", "✓".green(), verb.bold().green(), target),
    );
}

/// Print a complete JSON document for a command's result.
pub fn json_output(value: Value) {
    println!("{value}");
}
