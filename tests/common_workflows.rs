//! Integration tests for common paramguard workflows.
//!
//! These go through the facade crate the way an application would.

use paramguard::prelude::*;
use paramguard::{Check, RuleDefinition, render};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Plain rules
// =============================================================================

#[test]
fn test_list_query_roundtrip() {
    let fields = vec![
        FieldSpec::new("pageNum", "Page number")
            .min(Bound::Int(1))
            .max(Bound::Int(100)),
        FieldSpec::new("pageSize", "Page size").between(Range::int(-1, 100)),
        FieldSpec::new("sort", "Sort").array_in(",", Members::strings(["id", "username"])),
    ];

    let data = Validator::default()
        .validate_map(&params(&[("pageNum", "2"), ("pageSize", "-1")]), &fields)
        .unwrap();

    assert_eq!(data.parse::<i64>("pageNum"), Some(2));
    assert_eq!(data.parse::<i64>("pageSize"), Some(-1));
    assert_eq!(data.get("sort"), Some(""));
}

#[test]
fn test_errors_are_split_by_kind() {
    let validator = Validator::default();

    let unknown = vec![FieldSpec::new("a", "A").rule("uuid")];
    let err = validator.validate(|_| "x".to_string(), &unknown).unwrap_err();
    assert!(err.is_config());
    assert!(err.as_validation().is_none());

    let required = vec![FieldSpec::new("a", "A").required()];
    let err = validator.validate(|_| String::new(), &required).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Validation failed: a: A must not be empty");
}

// =============================================================================
// Custom rules
// =============================================================================

/// Value must start with a configurable prefix
#[derive(Debug)]
struct Prefixed(String);

impl Check for Prefixed {
    fn check(&self, value: &str, name: &str, _messages: &Messages) -> Result<(), String> {
        if value.starts_with(&self.0) {
            Ok(())
        } else {
            Err(render("{name} must start with {prefix}", &[("name", name), ("prefix", self.0.as_str())]))
        }
    }
}

struct PrefixRule;

impl RuleDefinition for PrefixRule {
    fn name(&self) -> &str {
        "prefix"
    }

    fn bind(&self, param: &RuleParam) -> Result<Arc<dyn Check>, ConfigError> {
        match param {
            RuleParam::Values(values) if values.len() == 1 => {
                Ok(Arc::new(Prefixed(values[0].clone())))
            }
            other => Err(paramguard::shape_error("prefix", "a single value", other)),
        }
    }
}

#[test]
fn test_parameterised_custom_rule() {
    let catalogue = Catalogue::builder()
        .with_builtins()
        .register(PrefixRule)
        .build();
    let validator = Validator::new(catalogue);

    let fields = vec![
        FieldSpec::new("sku", "SKU")
            .required()
            .rule_with("prefix", RuleParam::values(["PG-"])),
    ];

    assert!(validator.validate(|_| "PG-001".to_string(), &fields).is_ok());

    let err = validator.validate(|_| "XX-001".to_string(), &fields).unwrap_err();
    assert_eq!(err.as_validation().unwrap().message, "SKU must start with PG-");
    assert_eq!(err.as_validation().unwrap().constraint, "prefix");

    let bad = vec![FieldSpec::new("sku", "SKU").rule("prefix")];
    assert!(matches!(
        validator.compile(&bad),
        Err(ConfigError::ParamShape { .. })
    ));
}

// =============================================================================
// Presets
// =============================================================================

#[cfg(feature = "presets")]
#[test]
fn test_signup_form_with_presets() {
    let presets = Presets::new(&PresetSettings::default())
        .unwrap()
        .with_clock(FixedClock::at_timestamp(1_772_323_200).unwrap());

    let fields = vec![
        FieldSpec::new("username", "Username")
            .required()
            .satisfies(presets.username()),
        FieldSpec::new("password", "Password")
            .required()
            .satisfies(presets.password()),
        FieldSpec::new("height", "Height").between(HEIGHT),
        FieldSpec::new("weight", "Weight").between(WEIGHT),
    ];

    let ok = params(&[
        ("username", "gegeg122"),
        ("password", "$$$$$$$a"),
        ("height", "172"),
    ]);
    assert!(Validator::default().validate_map(&ok, &fields).is_ok());

    let weak = params(&[("username", "gegeg122"), ("password", "12345678")]);
    let err = Validator::default().validate_map(&weak, &fields).unwrap_err();
    assert_eq!(err.as_validation().unwrap().field, "password");
}

// =============================================================================
// Settings
// =============================================================================

#[cfg(feature = "config")]
#[test]
fn test_toolkit_from_settings() {
    use paramguard::paramguard_config::Settings;

    let toolkit = Settings::from_toml_str(
        r#"
        locale = "zh-cn"

        [presets]
        time_zone = "UTC"
        "#,
    )
    .unwrap()
    .build()
    .unwrap();

    let fields = vec![FieldSpec::new("mobile", "手机号").required().matches(toolkit.presets.mobile())];

    let err = toolkit
        .validator
        .validate(|_| "12909090909".to_string(), &fields)
        .unwrap_err();
    assert_eq!(err.as_validation().unwrap().message, "手机号 格式不正确");
}
