//! Configuration loading and merging
//!
//! Handles loading from a config file, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

pub mod loader;
pub mod merge;

pub use loader::{
    discover_config, env_provider, load_config, ConfigError, Resolved, CONFIG_CANDIDATES,
    ENV_PREFIX,
};
pub use merge::{merge_cli_with_config, CliOverrides};
