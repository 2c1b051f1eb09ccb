//! Core configuration type

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validate::{Field, FieldValue, Rule, Validate};

/// Colors accepted for [`Config::color`].
pub const COLORS: &[&str] = &["red", "green", "blue", "yellow"];

/// Keys understood in every source, in kebab-case.
pub const CONFIG_KEYS: &[&str] = &["color", "size", "count", "include-cupholders"];

const COLOR_RULES: &[Rule] = &[Rule::Required, Rule::OneOf(COLORS)];
const SIZE_RULES: &[Rule] = &[Rule::Required, Rule::Min(1), Rule::Max(100)];
const COUNT_RULES: &[Rule] = &[Rule::Min(1), Rule::Max(1000)];

/// Fully resolved configuration.
///
/// Keys are kebab-case in every source: `include-cupholders` in YAML and on
/// the command line, `EXAMPLE_INCLUDE_CUPHOLDERS` in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    #[serde(deserialize_with = "scalar_string")]
    pub color: String,
    pub size: i64,
    pub count: i64,
    pub include_cupholders: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { color: String::new(), size: 10, count: 1, include_cupholders: false }
    }
}

/// Accept any scalar for a string field, so `color: 7` or `EXAMPLE_COLOR=123`
/// reaches validation instead of failing to decode.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct ScalarString;

    impl Visitor<'_> for ScalarString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarString)
}

impl Validate for Config {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Color", FieldValue::Str(&self.color), COLOR_RULES),
            Field::new("Size", FieldValue::Int(self.size), SIZE_RULES),
            Field::new("Count", FieldValue::Int(self.count), COUNT_RULES),
            Field::new("IncludeCupHolders", FieldValue::Bool(self.include_cupholders), &[]),
        ]
    }
}
