//! Declarative field rules and their diagnostics.

use std::fmt;

/// A borrowed view of a single field's value, as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
}

impl FieldValue<'_> {
    /// True when the value equals the zero value of its type.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Int(n) => *n == 0,
            FieldValue::Bool(b) => !b,
        }
    }

    /// Numeric magnitude used by `min`/`max`. Strings are measured by length.
    fn magnitude(&self) -> Option<i64> {
        match self {
            FieldValue::Str(s) => Some(s.chars().count() as i64),
            FieldValue::Int(n) => Some(*n),
            FieldValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A validation rule attached to a field.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must not be the zero value.
    Required,
    /// Value must equal one of the candidates (case-sensitive).
    OneOf(&'static [&'static str]),
    /// Inclusive lower bound.
    Min(i64),
    /// Inclusive upper bound.
    Max(i64),
    /// Caller-supplied predicate, reported with the generic message.
    Custom { tag: &'static str, check: fn(&FieldValue<'_>) -> bool },
}

impl Rule {
    pub fn tag(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::OneOf(_) => "oneof",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Custom { tag, .. } => *tag,
        }
    }

    /// Returns true when `value` satisfies the rule.
    pub fn check(&self, value: &FieldValue<'_>) -> bool {
        match self {
            Rule::Required => !value.is_zero(),
            Rule::OneOf(candidates) => {
                let rendered = value.to_string();
                candidates.iter().any(|c| *c == rendered)
            }
            Rule::Min(min) => value.magnitude().map_or(true, |v| v >= *min),
            Rule::Max(max) => value.magnitude().map_or(true, |v| v <= *max),
            Rule::Custom { check, .. } => check(value),
        }
    }

    pub fn message(&self, field: &str) -> String {
        match self {
            Rule::Required => format!("{} is required", field),
            Rule::OneOf(candidates) => {
                format!("{} must be one of: {}", field, candidates.join(" "))
            }
            Rule::Min(min) => format!("{} must be at least {}", field, min),
            Rule::Max(max) => format!("{} must be at most {}", field, max),
            Rule::Custom { tag, .. } => format!("{} failed validation: {}", field, tag),
        }
    }
}
