// Field specifications builder

use crate::{Bound, Builtin, Members, PatternRule, PredicateRule, Range, RuleParam};
use std::borrow::Cow;

/// One rule applied to one field.
#[derive(Debug, Clone)]
pub struct RuleInvocation {
    /// Catalogue name of the rule
    pub rule: Cow<'static, str>,
    /// Rule-specific configuration
    pub param: RuleParam,
}

impl RuleInvocation {
    /// Invoke a rule by name. The parameter shape is checked when the
    /// field list is compiled.
    pub fn new(rule: impl Into<Cow<'static, str>>, param: RuleParam) -> Self {
        Self {
            rule: rule.into(),
            param,
        }
    }

    fn builtin(rule: Builtin, param: RuleParam) -> Self {
        Self::new(rule.as_str(), param)
    }
}

/// A named input plus its ordered rules.
///
/// ```
/// use paramguard_core::{FieldSpec, Range};
///
/// let page_size = FieldSpec::new("pageSize", "Page size")
///     .integer()
///     .between(Range::int(-1, 100));
/// assert_eq!(page_size.rules.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Lookup key, unique within a field list
    pub key: String,
    /// Name used in failure messages
    pub name: String,
    /// Rules, applied in order
    pub rules: Vec<RuleInvocation>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append an arbitrary invocation
    pub fn with(mut self, invocation: RuleInvocation) -> Self {
        self.rules.push(invocation);
        self
    }

    /// Append a parameterless rule by catalogue name
    pub fn rule(self, rule: impl Into<Cow<'static, str>>) -> Self {
        self.with(RuleInvocation::new(rule, RuleParam::None))
    }

    /// Append a rule by catalogue name with a parameter
    pub fn rule_with(self, rule: impl Into<Cow<'static, str>>, param: RuleParam) -> Self {
        self.with(RuleInvocation::new(rule, param))
    }

    /// Value must not be empty
    pub fn required(self) -> Self {
        self.with(RuleInvocation::builtin(Builtin::Required, RuleParam::None))
    }

    /// Value must be one of `values`
    pub fn one_of<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(RuleInvocation::builtin(
            Builtin::In,
            RuleParam::values(values),
        ))
    }

    /// Value must be `true` or `false`
    pub fn boolean(self) -> Self {
        self.with(RuleInvocation::builtin(Builtin::Bool, RuleParam::None))
    }

    /// Value must parse as an integer
    pub fn integer(self) -> Self {
        self.with(RuleInvocation::builtin(Builtin::Integer, RuleParam::None))
    }

    /// Number or length within an inclusive range
    pub fn between(self, range: Range) -> Self {
        self.with(RuleInvocation::builtin(
            Builtin::Between,
            RuleParam::Range(range),
        ))
    }

    /// Number or length at least `bound`
    pub fn min(self, bound: Bound) -> Self {
        self.with(RuleInvocation::builtin(Builtin::Min, RuleParam::Bound(bound)))
    }

    /// Number or length at most `bound`
    pub fn max(self, bound: Bound) -> Self {
        self.with(RuleInvocation::builtin(Builtin::Max, RuleParam::Bound(bound)))
    }

    /// Every `separator`-delimited element must be in `allowed`
    pub fn array_in(self, separator: impl Into<String>, allowed: Members) -> Self {
        self.with(RuleInvocation::builtin(
            Builtin::ArrayIn,
            RuleParam::members(separator, allowed),
        ))
    }

    /// None of `forbidden` may occur in the value
    pub fn filter_chars<I, S>(self, forbidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(RuleInvocation::builtin(
            Builtin::FilterChar,
            RuleParam::values(forbidden),
        ))
    }

    /// Value must match `pattern`
    pub fn matches(self, pattern: PatternRule) -> Self {
        self.with(RuleInvocation::builtin(
            Builtin::Regexp,
            RuleParam::Pattern(pattern),
        ))
    }

    /// `predicate` must hold for the value
    pub fn satisfies(self, predicate: PredicateRule) -> Self {
        self.with(RuleInvocation::builtin(
            Builtin::Func,
            RuleParam::Predicate(predicate),
        ))
    }

    /// `separator`-delimited elements must not repeat
    pub fn distinct(self, separator: impl Into<String>) -> Self {
        self.with(RuleInvocation::builtin(
            Builtin::Distinct,
            RuleParam::Separator(separator.into()),
        ))
    }
}
