//! Ready-made rules for common request parameters
//!
//! A [`Presets`] hands out [`PredicateRule`]s and [`PatternRule`]s for ids,
//! tokens, phone numbers, e-mail addresses, identity numbers, account names
//! and dates. Attach them with `FieldSpec::satisfies` / `FieldSpec::matches`.
//!
//! ```
//! use paramguard_core::{FieldSpec, Validator};
//! use paramguard_presets::{PresetSettings, Presets};
//!
//! let presets = Presets::new(&PresetSettings::default()).unwrap();
//! let fields = vec![
//!     FieldSpec::new("mobile", "Mobile").required().matches(presets.mobile()),
//!     FieldSpec::new("username", "Username").satisfies(presets.username()),
//! ];
//!
//! let lookup = |key: &str| match key {
//!     "mobile" => "13501691436".to_string(),
//!     "username" => "feg12_4".to_string(),
//!     _ => String::new(),
//! };
//! assert!(Validator::default().validate(lookup, &fields).is_ok());
//! ```
//!
//! Date-dependent presets read "now" from a [`Clock`] and resolve calendar
//! years in a [`ReferenceZone`]. Both are fixed when the presets are built.

mod clock;
mod predicates;
mod zone;

pub use clock::*;
pub use predicates::*;
pub use zone::*;

use paramguard_core::{ConfigError, Messages, PatternRule, PredicateRule, Range, render};
use predicates::{EMAIL_REGEX, MOBILE_REGEX};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Height in centimetres, for `between`
pub const HEIGHT: Range = Range::Int { min: 0, max: 300 };

/// Weight in kilograms, for `between`
pub const WEIGHT: Range = Range::Int { min: 0, max: 500 };

/// Birthdays must fall after this year unless configured otherwise
pub const DEFAULT_BIRTHDAY_MIN_YEAR: i32 = 1905;

/// Preset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSettings {
    /// IANA zone used to decide the current year
    pub time_zone: String,
    /// Birthdays must be strictly after this year
    pub birthday_min_year: i32,
}

impl Default for PresetSettings {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            birthday_min_year: DEFAULT_BIRTHDAY_MIN_YEAR,
        }
    }
}

/// Factory for preset rules.
#[derive(Debug, Clone)]
pub struct Presets {
    zone: ReferenceZone,
    clock: Arc<dyn Clock>,
    messages: Arc<Messages>,
    birthday_min_year: i32,
}

impl Presets {
    /// Load the reference zone and use the system clock.
    ///
    /// Fails with [`ConfigError::InvalidTimeZone`] if the zone is unknown.
    pub fn new(settings: &PresetSettings) -> Result<Self, ConfigError> {
        let zone = ReferenceZone::load(&settings.time_zone)?;

        Ok(Self {
            zone,
            clock: Arc::new(SystemClock),
            messages: Arc::new(Messages::default()),
            birthday_min_year: settings.birthday_min_year,
        })
    }

    /// Read "now" from `clock`
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Take message templates from `messages`
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = Arc::new(messages);
        self
    }

    pub fn zone(&self) -> ReferenceZone {
        self.zone
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn birthday_min_year(&self) -> i32 {
        self.birthday_min_year
    }

    /// Comma-separated positive integers, e.g. `1,3,4`
    pub fn id_list(&self) -> PredicateRule {
        PredicateRule::new(is_id_list, &self.messages.malformed)
    }

    /// Comma-separated 32-character lowercase hex tokens
    pub fn token_list(&self) -> PredicateRule {
        PredicateRule::new(is_token_list, &self.messages.malformed)
    }

    /// `YYYY-MM-DD` with a year after the configured minimum and before the
    /// current year in the reference zone
    pub fn birthday(&self) -> PredicateRule {
        let zone = self.zone;
        let clock = Arc::clone(&self.clock);
        let min_year = self.birthday_min_year;
        let message = render(&self.messages.birthday, &[("min", min_year.to_string().as_str())]);

        PredicateRule::new(
            move |value| is_birthday(value, zone.current_year(clock.as_ref()), min_year),
            message,
        )
    }

    /// 18-character resident identity number with a valid check code
    pub fn id_card_number(&self) -> PredicateRule {
        PredicateRule::new(is_id_card_number, &self.messages.invalid)
    }

    /// Unix timestamp in seconds that lies in the past
    pub fn start_at(&self) -> PredicateRule {
        let clock = Arc::clone(&self.clock);

        PredicateRule::new(
            move |value| is_past_timestamp(value, clock.now().timestamp()),
            &self.messages.start_at,
        )
    }

    /// Mainland mobile number
    pub fn mobile(&self) -> PatternRule {
        PatternRule::from_regex(MOBILE_REGEX.clone(), &self.messages.malformed)
    }

    pub fn email(&self) -> PatternRule {
        PatternRule::from_regex(EMAIL_REGEX.clone(), &self.messages.malformed)
    }

    pub fn username(&self) -> PredicateRule {
        PredicateRule::new(is_username, &self.messages.username)
    }

    pub fn real_name(&self) -> PredicateRule {
        PredicateRule::new(is_real_name, &self.messages.real_name)
    }

    pub fn password(&self) -> PredicateRule {
        PredicateRule::new(is_password, &self.messages.password)
    }

    /// 24-character lowercase hex document id
    pub fn object_id(&self) -> PredicateRule {
        PredicateRule::new(is_object_id, &self.messages.invalid)
    }

    pub fn object_id_list(&self) -> PredicateRule {
        PredicateRule::new(is_object_id_list, &self.messages.invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use paramguard_core::{Check, Messages, Satisfies};
    use pretty_assertions::assert_eq;

    fn presets_in_2026() -> Presets {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        Presets::new(&PresetSettings::default())
            .unwrap()
            .with_clock(FixedClock(now))
    }

    fn check(rule: PredicateRule, value: &str) -> Result<(), String> {
        Satisfies(rule).check(value, "Field", &Messages::english())
    }

    #[test]
    fn test_default_settings() {
        let settings = PresetSettings::default();
        assert_eq!(settings.time_zone, "Asia/Shanghai");
        assert_eq!(settings.birthday_min_year, 1905);
    }

    #[test]
    fn test_unknown_zone_is_config_error() {
        let settings = PresetSettings {
            time_zone: "Nowhere/Special".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            Presets::new(&settings),
            Err(ConfigError::InvalidTimeZone { .. })
        ));
    }

    #[test]
    fn test_birthday_uses_clock() {
        let presets = presets_in_2026();

        assert!(check(presets.birthday(), "2011-12-31").is_ok());
        assert!(check(presets.birthday(), "2030-01-01").is_err());
        assert!(check(presets.birthday(), "1900-01-01").is_err());
        assert!(check(presets.birthday(), "2011-1-1").is_err());
    }

    #[test]
    fn test_birthday_message_mentions_min_year() {
        let presets = presets_in_2026();
        let message = check(presets.birthday(), "1900-01-01").unwrap_err();

        assert_eq!(
            message,
            "Field must be a date after 1905 and before the current year"
        );
    }

    #[test]
    fn test_birthday_respects_configured_min_year() {
        let settings = PresetSettings {
            birthday_min_year: 1950,
            ..Default::default()
        };
        let presets = Presets::new(&settings)
            .unwrap()
            .with_clock(FixedClock::at_timestamp(1_772_323_200).unwrap());

        assert!(check(presets.birthday(), "1949-05-01").is_err());
        assert!(check(presets.birthday(), "1951-05-01").is_ok());
    }

    #[test]
    fn test_start_at_uses_clock() {
        let presets = presets_in_2026();

        assert!(check(presets.start_at(), "1616152846").is_ok());
        assert_eq!(
            check(presets.start_at(), "1893427200").unwrap_err(),
            "Field must be a time in the past"
        );
    }

    #[test]
    fn test_pattern_presets() {
        let presets = presets_in_2026();

        assert!(presets.mobile().is_match("13501691436"));
        assert!(!presets.mobile().is_match("12909090909"));
        assert!(presets.email().is_match("booldesign@163.com"));
        assert_eq!(presets.email().message, "{name} is malformed");
    }

    #[test]
    fn test_chinese_messages() {
        let presets = presets_in_2026().with_messages(Messages::simplified_chinese());

        assert_eq!(presets.id_card_number().message, "{name} 格式错误");
        assert_eq!(presets.birthday().message, "{name} 必须介于 1905年 - 至今 之间");
    }

    #[test]
    fn test_ranges() {
        assert_eq!(HEIGHT, Range::int(0, 300));
        assert_eq!(WEIGHT, Range::int(0, 500));
    }
}
