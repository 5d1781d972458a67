//! Validation engine
//!
//! A [`Validator`] compiles a field list against its [`Catalogue`] into a
//! [`Plan`]. Compilation resolves every rule name and binds every
//! parameter, so a plan can only fail with a [`ValidationError`].
//!
//! Running a plan is fail-fast across the whole field list: the first rule
//! that rejects a value stops the run.

use crate::{
    Catalogue, Check, ConfigError, FieldSpec, Messages, Result, ValidationError,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::Arc;

/// Entry point: a catalogue plus the message templates it renders with.
#[derive(Debug, Clone)]
pub struct Validator {
    catalogue: Catalogue,
    messages: Arc<Messages>,
}

impl Validator {
    /// Create a validator over `catalogue` with English messages
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            messages: Arc::new(Messages::default()),
        }
    }

    /// Replace the message templates
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Resolve and bind every rule of `fields`.
    ///
    /// Fails on unknown rule names, mismatched parameters and repeated keys.
    /// No value is looked up.
    pub fn compile(&self, fields: &[FieldSpec]) -> std::result::Result<Plan, ConfigError> {
        let mut seen = HashSet::with_capacity(fields.len());
        let mut compiled = Vec::with_capacity(fields.len());

        for field in fields {
            if !seen.insert(field.key.as_str()) {
                return Err(ConfigError::DuplicateKey(field.key.clone()));
            }

            let mut checks = Vec::with_capacity(field.rules.len());
            for invocation in &field.rules {
                let definition = self
                    .catalogue
                    .get(&invocation.rule)
                    .ok_or_else(|| ConfigError::UnknownRule(invocation.rule.to_string()))?;

                checks.push(BoundCheck {
                    rule: invocation.rule.to_string(),
                    check: definition.bind(&invocation.param)?,
                });
            }

            compiled.push(CompiledField {
                key: field.key.clone(),
                name: field.name.clone(),
                checks,
            });
        }

        tracing::debug!(fields = compiled.len(), "Compiled validation plan");

        Ok(Plan {
            fields: compiled,
            messages: Arc::clone(&self.messages),
        })
    }

    /// Compile `fields` and run them against `lookup`.
    ///
    /// ```
    /// use paramguard_core::{FieldSpec, Range, Validator};
    ///
    /// let validator = Validator::default();
    /// let fields = vec![
    ///     FieldSpec::new("pageSize", "Page size").between(Range::int(-1, 100)),
    /// ];
    ///
    /// let ok = validator.validate(|_| "10".to_string(), &fields).unwrap();
    /// assert_eq!(ok.get("pageSize"), Some("10"));
    ///
    /// let err = validator.validate(|_| "150".to_string(), &fields).unwrap_err();
    /// assert!(err.is_validation());
    /// ```
    pub fn validate<F>(&self, lookup: F, fields: &[FieldSpec]) -> Result<ValidatedParams>
    where
        F: Fn(&str) -> String,
    {
        let plan = self.compile(fields)?;
        Ok(plan.run(lookup)?)
    }

    /// Like [`validate`](Self::validate), reading values from a map.
    /// Missing keys read as the empty string.
    pub fn validate_map(
        &self,
        params: &HashMap<String, String>,
        fields: &[FieldSpec],
    ) -> Result<ValidatedParams> {
        self.validate(|key| params.get(key).cloned().unwrap_or_default(), fields)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Catalogue::builtin())
    }
}

#[derive(Debug, Clone)]
struct BoundCheck {
    rule: String,
    check: Arc<dyn Check>,
}

#[derive(Debug, Clone)]
struct CompiledField {
    key: String,
    name: String,
    checks: Vec<BoundCheck>,
}

/// A compiled field list. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Plan {
    fields: Vec<CompiledField>,
    messages: Arc<Messages>,
}

impl Plan {
    /// Run every field through its rules.
    ///
    /// `lookup` is called exactly once per field, in order, until a rule
    /// fails. Empty values skip every rule except presence checks.
    pub fn run<F>(&self, lookup: F) -> std::result::Result<ValidatedParams, ValidationError>
    where
        F: Fn(&str) -> String,
    {
        let mut data = HashMap::with_capacity(self.fields.len());

        for field in &self.fields {
            let value = lookup(&field.key);

            for bound in &field.checks {
                if value.is_empty() && bound.check.skips_empty() {
                    continue;
                }

                tracing::trace!(field = %field.key, rule = %bound.rule, "Applying rule");

                if let Err(message) = bound.check.check(&value, &field.name, &self.messages) {
                    tracing::debug!(field = %field.key, rule = %bound.rule, "Validation failed");
                    return Err(ValidationError::new(field.key.clone(), message)
                        .with_name(field.name.clone())
                        .with_constraint(bound.rule.clone())
                        .with_value(value));
                }
            }

            data.insert(field.key.clone(), value);
        }

        Ok(ValidatedParams { data })
    }

    /// Run against a map; missing keys read as the empty string
    pub fn run_map(
        &self,
        params: &HashMap<String, String>,
    ) -> std::result::Result<ValidatedParams, ValidationError> {
        self.run(|key| params.get(key).cloned().unwrap_or_default())
    }

    /// Field keys in validation order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Values that passed validation, exactly as looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedParams {
    data: HashMap<String, String>,
}

impl ValidatedParams {
    /// Raw value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Parse the value for `key`. `None` when absent, empty or unparsable.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse().ok())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.data
    }
}

impl IntoIterator for ValidatedParams {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
