// Built-in validators

use crate::{
    Bound, Check, ConfigError, Members, Messages, PatternRule, PredicateRule, Range,
    RuleDefinition, RuleParam, render, render_list, shape_error,
};
use std::collections::HashMap;
use std::sync::Arc;

/// The built-in rule definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Required,
    In,
    Bool,
    Integer,
    Between,
    Min,
    Max,
    ArrayIn,
    FilterChar,
    Regexp,
    Func,
    Distinct,
}

impl Builtin {
    pub const ALL: [Builtin; 12] = [
        Builtin::Required,
        Builtin::In,
        Builtin::Bool,
        Builtin::Integer,
        Builtin::Between,
        Builtin::Min,
        Builtin::Max,
        Builtin::ArrayIn,
        Builtin::FilterChar,
        Builtin::Regexp,
        Builtin::Func,
        Builtin::Distinct,
    ];

    /// Catalogue name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Builtin::Required => "required",
            Builtin::In => "in",
            Builtin::Bool => "bool",
            Builtin::Integer => "integer",
            Builtin::Between => "between",
            Builtin::Min => "min",
            Builtin::Max => "max",
            Builtin::ArrayIn => "array_in",
            Builtin::FilterChar => "filter_char",
            Builtin::Regexp => "regexp",
            Builtin::Func => "func",
            Builtin::Distinct => "distinct",
        }
    }

    /// Parameter shape the rule expects
    const fn expected(&self) -> &'static str {
        match self {
            Builtin::Required | Builtin::Bool | Builtin::Integer => "none",
            Builtin::In | Builtin::FilterChar => "values",
            Builtin::Between => "range",
            Builtin::Min | Builtin::Max => "bound",
            Builtin::ArrayIn => "members",
            Builtin::Regexp => "pattern",
            Builtin::Func => "predicate",
            Builtin::Distinct => "separator",
        }
    }
}

impl RuleDefinition for Builtin {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn bind(&self, param: &RuleParam) -> Result<Arc<dyn Check>, ConfigError> {
        let check: Arc<dyn Check> = match (self, param) {
            (Builtin::Required, RuleParam::None) => Arc::new(Required),
            (Builtin::In, RuleParam::Values(values)) => Arc::new(OneOf(values.clone())),
            (Builtin::Bool, RuleParam::None) => Arc::new(IsBool),
            (Builtin::Integer, RuleParam::None) => Arc::new(IsInteger),
            (Builtin::Between, RuleParam::Range(range)) => Arc::new(Between(*range)),
            (Builtin::Min, RuleParam::Bound(bound)) => Arc::new(Min(*bound)),
            (Builtin::Max, RuleParam::Bound(bound)) => Arc::new(Max(*bound)),
            (Builtin::ArrayIn, RuleParam::Members { separator, allowed }) => Arc::new(ArrayIn {
                separator: separator.clone(),
                allowed: allowed.clone(),
            }),
            (Builtin::FilterChar, RuleParam::Values(chars)) => Arc::new(FilterChar(chars.clone())),
            (Builtin::Regexp, RuleParam::Pattern(pattern)) => Arc::new(Matches(pattern.clone())),
            (Builtin::Func, RuleParam::Predicate(predicate)) => {
                Arc::new(Satisfies(predicate.clone()))
            }
            (Builtin::Distinct, RuleParam::Separator(separator)) => {
                Arc::new(Distinct(separator.clone()))
            }
            (rule, other) => return Err(shape_error(rule.as_str(), rule.expected(), other)),
        };
        Ok(check)
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Split on `separator`; an empty separator yields one element per character
fn split_elements<'a>(value: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        value
            .char_indices()
            .map(|(i, c)| &value[i..i + c.len_utf8()])
            .collect()
    } else {
        value.split(separator).collect()
    }
}

// Presence

/// Value must not be empty
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl Check for Required {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        if value.is_empty() {
            Err(render(&messages.required, &[("name", name)]))
        } else {
            Ok(())
        }
    }

    fn skips_empty(&self) -> bool {
        false
    }
}

// Membership

/// Value must equal one of the allowed strings
#[derive(Debug, Clone)]
pub struct OneOf(pub Vec<String>);

impl Check for OneOf {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        if self.0.iter().any(|allowed| allowed == value) {
            Ok(())
        } else {
            Err(render(&messages.not_in, &[("name", name)]))
        }
    }
}

// Type checks

/// Value must be exactly `true` or `false`
#[derive(Debug, Clone, Copy)]
pub struct IsBool;

impl Check for IsBool {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        match value.parse::<bool>() {
            Ok(_) => Ok(()),
            Err(_) => Err(render(&messages.boolean, &[("name", name)])),
        }
    }
}

/// Value must parse as a 64-bit integer
#[derive(Debug, Clone, Copy)]
pub struct IsInteger;

impl Check for IsInteger {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        match value.parse::<i64>() {
            Ok(_) => Ok(()),
            Err(_) => Err(render(&messages.integer, &[("name", name)])),
        }
    }
}

// Bounds

/// Number or code-point length within an inclusive range
#[derive(Debug, Clone, Copy)]
pub struct Between(pub Range);

impl Check for Between {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        let (ok, template, min, max) = match self.0 {
            Range::Int { min, max } => (
                value.parse::<i64>().is_ok_and(|v| min <= v && v <= max),
                &messages.between_int,
                min.to_string(),
                max.to_string(),
            ),
            Range::Float { min, max } => (
                value.parse::<f64>().is_ok_and(|v| min <= v && v <= max),
                &messages.between_float,
                min.to_string(),
                max.to_string(),
            ),
            Range::Length { min, max } => {
                let len = char_len(value);
                (
                    min <= len && len <= max,
                    &messages.between_length,
                    min.to_string(),
                    max.to_string(),
                )
            }
        };

        if ok {
            Ok(())
        } else {
            Err(render(template, &[("name", name), ("min", &min), ("max", &max)]))
        }
    }
}

/// Number or code-point length at least the bound
#[derive(Debug, Clone, Copy)]
pub struct Min(pub Bound);

impl Check for Min {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        let (ok, template, bound) = match self.0 {
            Bound::Int(bound) => (
                value.parse::<i64>().is_ok_and(|v| v >= bound),
                &messages.min_int,
                bound.to_string(),
            ),
            Bound::Float(bound) => (
                value.parse::<f64>().is_ok_and(|v| v >= bound),
                &messages.min_float,
                bound.to_string(),
            ),
            Bound::Length(bound) => (
                char_len(value) >= bound,
                &messages.min_length,
                bound.to_string(),
            ),
        };

        if ok {
            Ok(())
        } else {
            Err(render(template, &[("name", name), ("bound", &bound)]))
        }
    }
}

/// Number or code-point length at most the bound
#[derive(Debug, Clone, Copy)]
pub struct Max(pub Bound);

impl Check for Max {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        let (ok, template, bound) = match self.0 {
            Bound::Int(bound) => (
                value.parse::<i64>().is_ok_and(|v| v <= bound),
                &messages.max_int,
                bound.to_string(),
            ),
            Bound::Float(bound) => (
                value.parse::<f64>().is_ok_and(|v| v <= bound),
                &messages.max_float,
                bound.to_string(),
            ),
            Bound::Length(bound) => (
                char_len(value) <= bound,
                &messages.max_length,
                bound.to_string(),
            ),
        };

        if ok {
            Ok(())
        } else {
            Err(render(template, &[("name", name), ("bound", &bound)]))
        }
    }
}

// Lists

/// Every separated element must be in the allowed set
#[derive(Debug, Clone)]
pub struct ArrayIn {
    pub separator: String,
    pub allowed: Members,
}

impl Check for ArrayIn {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        let mut elements = split_elements(value, &self.separator).into_iter();
        let (ok, values) = match &self.allowed {
            Members::Strings(allowed) => (
                elements.all(|e| allowed.iter().any(|a| a == e)),
                render_list(allowed),
            ),
            Members::Ints(allowed) => (
                elements.all(|e| e.parse::<i64>().is_ok_and(|n| allowed.contains(&n))),
                render_list(allowed),
            ),
        };

        if ok {
            Ok(())
        } else {
            Err(render(
                &messages.array_in,
                &[("name", name), ("values", &values)],
            ))
        }
    }
}

/// No forbidden substring may occur
#[derive(Debug, Clone)]
pub struct FilterChar(pub Vec<String>);

impl Check for FilterChar {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        if self.0.iter().any(|forbidden| value.contains(forbidden.as_str())) {
            Err(render(
                &messages.filter_char,
                &[("name", name), ("values", &render_list(&self.0))],
            ))
        } else {
            Ok(())
        }
    }
}

/// Separated elements must be pairwise distinct
#[derive(Debug, Clone)]
pub struct Distinct(pub String);

impl Check for Distinct {
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String> {
        let elements = split_elements(value, &self.0);
        let mut counts: HashMap<&str, usize> = HashMap::with_capacity(elements.len());
        for &element in &elements {
            *counts.entry(element).or_default() += 1;
        }

        // Report the earliest element that repeats later on
        match elements.iter().copied().find(|e| counts[e] > 1) {
            Some(duplicate) => Err(render(
                &messages.distinct,
                &[("name", name), ("value", duplicate)],
            )),
            None => Ok(()),
        }
    }
}

// Custom

/// Value must match the expression
#[derive(Debug, Clone)]
pub struct Matches(pub PatternRule);

impl Check for Matches {
    fn check(&self, value: &str, name: &str, _messages: &Messages) -> Result<(), String> {
        if self.0.is_match(value) {
            Ok(())
        } else {
            Err(render(&self.0.message, &[("name", name)]))
        }
    }
}

/// Predicate must hold for the value
#[derive(Debug, Clone)]
pub struct Satisfies(pub PredicateRule);

impl Check for Satisfies {
    fn check(&self, value: &str, name: &str, _messages: &Messages) -> Result<(), String> {
        if self.0.test(value) {
            Ok(())
        } else {
            Err(render(&self.0.message, &[("name", name)]))
        }
    }
}
