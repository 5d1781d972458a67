// Rule traits

use crate::{ConfigError, Messages, RuleParam, render};
use std::fmt;
use std::sync::Arc;

/// A rule bound to its parameter, ready to run against values.
pub trait Check: Send + Sync + fmt::Debug {
    /// Check `value`; on failure return the rendered message.
    ///
    /// `name` is the display name of the field being checked.
    fn check(&self, value: &str, name: &str, messages: &Messages) -> Result<(), String>;

    /// Whether an empty value passes without running the check.
    ///
    /// Only presence checks should return `false`.
    fn skips_empty(&self) -> bool {
        true
    }
}

/// A catalogue entry: knows its name and how to bind a parameter.
pub trait RuleDefinition: Send + Sync {
    /// Name used in [`RuleInvocation`](crate::RuleInvocation)s
    fn name(&self) -> &str;

    /// Turn a parameter into a runnable check.
    ///
    /// Fails with [`ConfigError::ParamShape`] when the parameter is not the
    /// shape this rule expects.
    fn bind(&self, param: &RuleParam) -> Result<Arc<dyn Check>, ConfigError>;
}

/// Build the error returned when a parameter has the wrong shape.
pub fn shape_error(rule: &str, expected: &'static str, found: &RuleParam) -> ConfigError {
    ConfigError::ParamShape {
        rule: rule.to_string(),
        expected,
        found: found.kind(),
    }
}

type PredicateFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Parameterless catalogue entry backed by a closure.
///
/// Handy for registering project-specific rules under their own name:
///
/// ```
/// use paramguard_core::{Catalogue, FieldSpec, FnRule, Validator};
///
/// let catalogue = Catalogue::builder()
///     .with_builtins()
///     .register(FnRule::new("even", "{name} must be even", |v| {
///         v.parse::<i64>().map(|n| n % 2 == 0).unwrap_or(false)
///     }))
///     .build();
///
/// let validator = Validator::new(catalogue);
/// let fields = vec![FieldSpec::new("n", "Number").rule("even")];
/// assert!(validator.validate(|_| "4".to_string(), &fields).is_ok());
/// assert!(validator.validate(|_| "5".to_string(), &fields).is_err());
/// ```
#[derive(Clone)]
pub struct FnRule {
    name: String,
    message: String,
    func: PredicateFn,
}

impl FnRule {
    pub fn new<F>(name: impl Into<String>, message: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: message.into(),
            func: Arc::new(func),
        }
    }
}

impl RuleDefinition for FnRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind(&self, param: &RuleParam) -> Result<Arc<dyn Check>, ConfigError> {
        match param {
            RuleParam::None => Ok(Arc::new(self.clone())),
            other => Err(shape_error(&self.name, "none", other)),
        }
    }
}

impl Check for FnRule {
    fn check(&self, value: &str, name: &str, _messages: &Messages) -> Result<(), String> {
        if (self.func)(value) {
            Ok(())
        } else {
            Err(render(&self.message, &[("name", name)]))
        }
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
