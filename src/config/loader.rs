//! Config file discovery and layered resolution

use figment::providers::{Env, Serialized};
use figment::value::{Dict, Value};
use figment::Figment;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::merge::{merge_cli_with_config, CliOverrides};
use crate::domain::{Config, CONFIG_KEYS};

/// Prefix for environment overrides: `EXAMPLE_SIZE`, `EXAMPLE_INCLUDE_CUPHOLDERS`, ...
pub const ENV_PREFIX: &str = "EXAMPLE_";

/// File names searched for in the working directory, in order.
pub const CONFIG_CANDIDATES: &[&str] = &["config.yaml", "config.yml", "config"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML syntax in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unable to decode configuration")]
    Extract(#[from] figment::Error),
}

/// A resolved configuration and the file it was read from, if any.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Resolve configuration with precedence CLI > Env > File > Defaults.
///
/// With `config_path` set the file must exist; otherwise `dir` is searched and
/// a missing file simply drops that layer.
pub fn load_config(
    dir: &Path,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<Resolved, ConfigError> {
    let source = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    match &source {
        Some(path) => {
            tracing::debug!("Reading config file {}", path.display());
            figment = figment.merge(Serialized::defaults(read_yaml_config(path)?));
        }
        None => tracing::info!("No config file found in {}", dir.display()),
    }

    figment = figment.merge(Serialized::defaults(env_values()));
    figment = merge_cli_with_config(figment, overrides);

    let config: Config = figment.extract()?;
    tracing::debug!(?config, "resolved configuration");

    Ok(Resolved { config, source })
}

/// Look for a config file directly inside `dir` (no recursion).
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.is_file())
}

/// Environment provider mapping `EXAMPLE_INCLUDE_CUPHOLDERS` to `include-cupholders`.
pub fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_ascii_lowercase().replace('_', "-").into())
}

/// Non-empty `EXAMPLE_*` values, typed the way figment parses env values.
///
/// An empty variable counts as unset so it never masks the file or defaults.
pub fn env_values() -> Dict {
    let env = env_provider();
    env.iter()
        .filter(|(key, value)| {
            if value.is_empty() {
                tracing::debug!("Ignoring empty environment value for {}", key.as_str());
            }
            !value.is_empty()
        })
        .map(|(key, value)| {
            let value = match value.parse::<Value>() {
                Ok(value) => value,
                Err(never) => match never {},
            };
            (key.as_str().to_string(), value)
        })
        .collect()
}

fn read_yaml_config(path: &Path) -> Result<serde_yaml::Mapping, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

    // An empty file (or one holding only comments) parses as null.
    let raw: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    match raw {
        serde_yaml::Value::Null => Ok(serde_yaml::Mapping::new()),
        serde_yaml::Value::Mapping(mapping) => Ok(normalize_keys(mapping)),
        _ => Err(ConfigError::Parse {
            path: path.to_path_buf(),
            source: <serde_yaml::Error as serde::de::Error>::custom(
                "expected a mapping of option names to values",
            ),
        }),
    }
}

/// Lower-case string keys so `Color:` and `color:` name the same option.
fn normalize_keys(mapping: serde_yaml::Mapping) -> serde_yaml::Mapping {
    mapping
        .into_iter()
        .map(|(key, value)| match key {
            serde_yaml::Value::String(name) => {
                let name = name.to_lowercase();
                if !CONFIG_KEYS.contains(&name.as_str()) {
                    tracing::debug!("Ignoring unknown config key {}", name);
                }
                (serde_yaml::Value::String(name), value)
            }
            other => (other, value),
        })
        .collect()
}
