// Rule parameters
//
// Every rule receives its configuration through `RuleParam`. The shape is
// fixed when the field spec is built, so numeric and length bounds never
// need to be guessed from the value at validation time.

use crate::ConfigError;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Inclusive range used by the `between` rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Range {
    /// Value must parse as an integer within `min..=max`
    Int { min: i64, max: i64 },
    /// Value must parse as a float within `min..=max`
    Float { min: f64, max: f64 },
    /// Value must be `min..=max` code points long
    Length { min: usize, max: usize },
}

impl Range {
    pub fn int(min: i64, max: i64) -> Self {
        Range::Int { min, max }
    }

    pub fn float(min: f64, max: f64) -> Self {
        Range::Float { min, max }
    }

    pub fn length(min: usize, max: usize) -> Self {
        Range::Length { min, max }
    }

    /// Parse a pair of string-encoded length bounds, e.g. `("1", "20")`.
    pub fn length_str(min: &str, max: &str) -> Result<Self, ConfigError> {
        Ok(Range::Length {
            min: parse_length(min)?,
            max: parse_length(max)?,
        })
    }
}

/// Single inclusive bound used by the `min` and `max` rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Int(i64),
    Float(f64),
    Length(usize),
}

impl Bound {
    /// Parse a string-encoded length bound, e.g. `"3"`.
    pub fn length_str(bound: &str) -> Result<Self, ConfigError> {
        parse_length(bound).map(Bound::Length)
    }
}

fn parse_length(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidBound(format!("`{}` is not a length", raw)))
}

/// Allowed element set for the `array_in` rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Members {
    /// Elements compare as strings
    Strings(Vec<String>),
    /// Elements must parse as integers and compare numerically
    Ints(Vec<i64>),
}

impl Members {
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Members::Strings(values.into_iter().map(Into::into).collect())
    }

    pub fn ints(values: impl IntoIterator<Item = i64>) -> Self {
        Members::Ints(values.into_iter().collect())
    }
}

/// Regular expression plus the message rendered when it does not match.
///
/// The message is a template; `{name}` is replaced by the field's display
/// name.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    pub message: String,
}

impl PatternRule {
    /// Compile `pattern`; an invalid expression is a configuration error.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// Wrap an already compiled expression
    pub fn from_regex(regex: Regex, message: impl Into<String>) -> Self {
        Self {
            regex,
            message: message.into(),
        }
    }

    /// Replace the message template
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

type PredicateFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Arbitrary predicate plus the message rendered when it returns false.
#[derive(Clone)]
pub struct PredicateRule {
    func: PredicateFn,
    pub message: String,
}

impl PredicateRule {
    pub fn new<F>(func: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            message: message.into(),
        }
    }

    /// Replace the message template
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn test(&self, value: &str) -> bool {
        (self.func)(value)
    }
}

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Configuration payload of a rule invocation.
#[derive(Debug, Clone, Default)]
pub enum RuleParam {
    #[default]
    None,
    /// Allowed values (`in`) or forbidden substrings (`filter_char`)
    Values(Vec<String>),
    Range(Range),
    Bound(Bound),
    Members {
        separator: String,
        allowed: Members,
    },
    Pattern(PatternRule),
    Predicate(PredicateRule),
    /// Element separator (`distinct`)
    Separator(String),
}

impl RuleParam {
    /// Short name of the variant, used in configuration errors.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleParam::None => "none",
            RuleParam::Values(_) => "values",
            RuleParam::Range(_) => "range",
            RuleParam::Bound(_) => "bound",
            RuleParam::Members { .. } => "members",
            RuleParam::Pattern(_) => "pattern",
            RuleParam::Predicate(_) => "predicate",
            RuleParam::Separator(_) => "separator",
        }
    }

    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleParam::Values(values.into_iter().map(Into::into).collect())
    }

    pub fn members(separator: impl Into<String>, allowed: Members) -> Self {
        RuleParam::Members {
            separator: separator.into(),
            allowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_str_parses() {
        assert_eq!(Range::length_str("1", "20").unwrap(), Range::length(1, 20));
        assert_eq!(Bound::length_str(" 3 ").unwrap(), Bound::Length(3));
    }

    #[test]
    fn test_length_str_rejects_garbage() {
        assert!(matches!(
            Range::length_str("one", "20"),
            Err(ConfigError::InvalidBound(_))
        ));
        assert!(Bound::length_str("-1").is_err());
    }

    #[test]
    fn test_pattern_rule_invalid_regex() {
        let result = PatternRule::new("([a-z", "{name} is malformed");
        assert!(matches!(result, Err(ConfigError::InvalidPattern(_))));
    }

    #[test]
    fn test_predicate_rule() {
        let rule = PredicateRule::new(|v| v.starts_with('a'), "{name} must start with a");
        assert!(rule.test("apple"));
        assert!(!rule.test("banana"));
        assert!(format!("{:?}", rule).contains("must start with a"));
    }

    #[test]
    fn test_param_kind() {
        assert_eq!(RuleParam::default().kind(), "none");
        assert_eq!(RuleParam::values(["a", "b"]).kind(), "values");
        assert_eq!(
            RuleParam::members(",", Members::ints([1, 2])).kind(),
            "members"
        );
    }
}
