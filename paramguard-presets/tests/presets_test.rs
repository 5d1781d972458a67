//! Presets wired through the validation engine

use paramguard_core::{FieldSpec, Messages, PatternRule, PredicateRule, Validator};
use paramguard_presets::{FixedClock, HEIGHT, PresetSettings, Presets, WEIGHT};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn presets() -> Presets {
    // 2026-03-01T00:00:00Z
    Presets::new(&PresetSettings::default())
        .unwrap()
        .with_clock(FixedClock::at_timestamp(1_772_323_200).unwrap())
}

fn profile_fields(presets: &Presets) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("username", "Username")
            .required()
            .satisfies(presets.username()),
        FieldSpec::new("realName", "Real name").satisfies(presets.real_name()),
        FieldSpec::new("password", "Password")
            .required()
            .satisfies(presets.password()),
        FieldSpec::new("mobile", "Mobile").matches(presets.mobile()),
        FieldSpec::new("email", "Email").matches(presets.email()),
        FieldSpec::new("idCard", "Id card").satisfies(presets.id_card_number()),
        FieldSpec::new("birthday", "Birthday").satisfies(presets.birthday()),
        FieldSpec::new("height", "Height").between(HEIGHT),
        FieldSpec::new("weight", "Weight").between(WEIGHT),
        FieldSpec::new("tagIds", "Tag ids").satisfies(presets.id_list()),
        FieldSpec::new("startAt", "Start time").satisfies(presets.start_at()),
    ]
}

fn valid_profile() -> HashMap<String, String> {
    [
        ("username", "feg12_4"),
        ("realName", "卫建文"),
        ("password", "password1"),
        ("mobile", "13501691436"),
        ("email", "booldesign@163.com"),
        ("idCard", "110103200301013718"),
        ("birthday", "2003-01-01"),
        ("height", "180"),
        ("weight", "75"),
        ("tagIds", "1,3,4"),
        ("startAt", "1616152846"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn test_valid_profile_passes() {
    let presets = presets();
    let data = Validator::default()
        .validate_map(&valid_profile(), &profile_fields(&presets))
        .unwrap();

    assert_eq!(data.get("idCard"), Some("110103200301013718"));
    assert_eq!(data.parse::<i64>("height"), Some(180));
}

#[test]
fn test_optional_presets_skip_empty_values() {
    let presets = presets();
    let mut params = valid_profile();
    for key in ["realName", "mobile", "email", "idCard", "birthday", "tagIds"] {
        params.remove(key);
    }

    assert!(
        Validator::default()
            .validate_map(&params, &profile_fields(&presets))
            .is_ok()
    );
}

#[test]
fn test_bad_check_code_reports_id_card() {
    let presets = presets();
    let mut params = valid_profile();
    params.insert("idCard".into(), "110103200301013719".into());

    let err = Validator::default()
        .validate_map(&params, &profile_fields(&presets))
        .unwrap_err();
    let err = err.as_validation().unwrap();

    assert_eq!(err.field, "idCard");
    assert_eq!(err.constraint, "func");
    assert_eq!(err.message, "Id card is invalid");
}

#[test]
fn test_username_reported_before_later_fields() {
    let presets = presets();
    let mut params = valid_profile();
    params.insert("username".into(), "_gegg124".into());
    params.insert("mobile".into(), "12909090909".into());

    let err = Validator::default()
        .validate_map(&params, &profile_fields(&presets))
        .unwrap_err();

    assert_eq!(err.as_validation().unwrap().field, "username");
}

#[test]
fn test_mobile_uses_regexp_rule() {
    let presets = presets();
    let mut params = valid_profile();
    params.insert("mobile".into(), "12909090909".into());

    let err = Validator::default()
        .validate_map(&params, &profile_fields(&presets))
        .unwrap_err();
    let err = err.as_validation().unwrap();

    assert_eq!(err.constraint, "regexp");
    assert_eq!(err.message, "Mobile is malformed");
}

#[test]
fn test_height_out_of_range() {
    let presets = presets();
    let mut params = valid_profile();
    params.insert("height".into(), "301".into());

    let err = Validator::default()
        .validate_map(&params, &profile_fields(&presets))
        .unwrap_err();

    assert_eq!(
        err.as_validation().unwrap().message,
        "Height must be an integer between 0 and 300"
    );
}

#[test]
fn test_future_birthday_in_chinese() {
    let presets = presets().with_messages(Messages::simplified_chinese());
    let validator = Validator::default().with_messages(Messages::simplified_chinese());
    let mut params = valid_profile();
    params.insert("birthday".into(), "2030-01-01".into());

    let err = validator
        .validate_map(&params, &profile_fields(&presets))
        .unwrap_err();

    assert_eq!(
        err.as_validation().unwrap().message,
        "Birthday 必须介于 1905年 - 至今 之间"
    );
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_preset_types_are_send_sync() {
    assert_send_sync::<Presets>();
    assert_send_sync::<PredicateRule>();
    assert_send_sync::<PatternRule>();
}
