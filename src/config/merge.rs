//! Command-line overrides layered on top of file and environment values

use figment::providers::Serialized;
use figment::Figment;
use serde::Serialize;

/// Values the user passed explicitly on the command line.
///
/// Unset fields are skipped entirely so they never mask lower layers.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_cupholders: Option<bool>,
}

impl CliOverrides {
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.size.is_none()
            && self.count.is_none()
            && self.include_cupholders.is_none()
    }
}

/// Merge CLI overrides as the highest-precedence layer.
pub fn merge_cli_with_config(figment: Figment, overrides: &CliOverrides) -> Figment {
    if overrides.is_empty() {
        return figment;
    }
    figment.merge(Serialized::defaults(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Config;

    #[test]
    fn set_fields_replace_lower_layers() {
        let base = Figment::new().merge(Serialized::defaults(Config::default()));
        let overrides = CliOverrides { size: Some(42), ..CliOverrides::default() };

        let config: Config =
            merge_cli_with_config(base, &overrides).extract().expect("extract");
        assert_eq!(config.size, 42);
        assert_eq!(config.count, 1);
        assert_eq!(config.color, "");
    }

    #[test]
    fn explicit_false_overrides_true() {
        let base = Figment::new().merge(Serialized::defaults(Config {
            include_cupholders: true,
            ..Config::default()
        }));
        let overrides =
            CliOverrides { include_cupholders: Some(false), ..CliOverrides::default() };

        let config: Config =
            merge_cli_with_config(base, &overrides).extract().expect("extract");
        assert!(!config.include_cupholders);
    }

    #[test]
    fn empty_overrides_are_a_no_op() {
        assert!(CliOverrides::default().is_empty());
        let base = Figment::new().merge(Serialized::defaults(Config::default()));
        let config: Config = merge_cli_with_config(base, &CliOverrides::default())
            .extract()
            .expect("extract");
        assert_eq!(config, Config::default());
    }
}
