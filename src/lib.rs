//! layered-config: layered configuration with declarative validation
//!
//! Merges built-in defaults, an optional YAML file, `EXAMPLE_*` environment
//! variables and command-line flags into one [`domain::Config`], then checks
//! it against per-field rules and reports every violation.

pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod validate;
