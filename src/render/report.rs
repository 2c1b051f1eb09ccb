//! Success and failure reports printed after validation.

use crate::domain::Config;
use crate::validate::ValidationErrors;
use std::fmt::Write;

pub const SUCCESS_HEADER: &str = "Configuration loaded successfully:";
pub const FAILURE_HEADER: &str = "Validation failed:";

pub fn render_success(config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", SUCCESS_HEADER);
    let _ = writeln!(out, "Color: {}", config.color);
    let _ = writeln!(out, "Size: {}", config.size);
    let _ = writeln!(out, "Count: {}", config.count);
    let _ = writeln!(out, "Include cup holders: {}", config.include_cupholders);
    out
}

pub fn render_failure(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", FAILURE_HEADER);
    for violation in errors.iter() {
        let _ = writeln!(out, "- {}", violation);
    }
    out
}
