//! Rule-based validation of resolved configuration
//!
//! Types describe their fields through [`Validate`]; [`validate`] checks every
//! field and collects all violations instead of stopping at the first.

pub mod rules;

pub use rules::{FieldValue, Rule};

use std::fmt;
use thiserror::Error;

/// One field of a validated structure, with the rules declared for it.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
    pub rules: &'static [Rule],
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>, rules: &'static [Rule]) -> Self {
        Self { name, value, rules }
    }
}

/// Implemented by structures that declare per-field rules.
pub trait Validate {
    fn fields(&self) -> Vec<Field<'_>>;
}

/// A single field/rule pair that failed.
#[derive(Debug, Clone)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rule.message(self.field))
    }
}

/// Every violation found in one validation pass, in field declaration order.
#[derive(Debug, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check every field of `target`.
///
/// Within a field, rules run in declaration order and the first failure ends
/// that field's checks, so an empty required value is not also reported as
/// out of range.
pub fn validate<T: Validate + ?Sized>(target: &T) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();

    for field in target.fields() {
        if let Some(rule) = field.rules.iter().find(|rule| !rule.check(&field.value)) {
            tracing::debug!(field = field.name, rule = rule.tag(), value = %field.value, "rule failed");
            violations.push(Violation { field: field.name, rule: *rule });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: String,
        level: i64,
    }

    const NAME_RULES: &[Rule] = &[Rule::Required, Rule::OneOf(&["alpha", "beta"])];
    const LEVEL_RULES: &[Rule] = &[Rule::Required, Rule::Min(1), Rule::Max(5)];

    impl Validate for Probe {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("Name", FieldValue::Str(&self.name), NAME_RULES),
                Field::new("Level", FieldValue::Int(self.level), LEVEL_RULES),
            ]
        }
    }

    fn messages(probe: &Probe) -> Vec<String> {
        match validate(probe) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn valid_structure_has_no_violations() {
        let probe = Probe { name: "beta".into(), level: 5 };
        assert!(validate(&probe).is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let probe = Probe { name: "gamma".into(), level: 9 };
        assert_eq!(
            messages(&probe),
            vec!["Name must be one of: alpha beta", "Level must be at most 5"]
        );
    }

    #[test]
    fn stops_at_first_failing_rule_per_field() {
        let probe = Probe { name: String::new(), level: 0 };
        let errors = validate(&probe).expect_err("both fields are empty");
        assert_eq!(errors.len(), 2);
        let tags: Vec<_> = errors.iter().map(|v| v.rule.tag()).collect();
        assert_eq!(tags, vec!["required", "required"]);
    }

    #[test]
    fn error_summarizes_count() {
        let probe = Probe { name: "alpha".into(), level: -1 };
        let errors = validate(&probe).expect_err("level below minimum");
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
        assert!(!errors.is_empty());
    }
}
