//! Message templates
//!
//! Failure messages are templates with named placeholders: `{name}` is the
//! field's display name, `{min}`/`{max}`/`{bound}` are rule bounds,
//! `{values}` is a rendered list and `{value}` a single offending element.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in message set selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageLocale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-cn", alias = "zh-CN", alias = "zh")]
    ZhCn,
}

impl MessageLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLocale::En => "en",
            MessageLocale::ZhCn => "zh-cn",
        }
    }
}

impl FromStr for MessageLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(MessageLocale::En),
            "zh" | "zh-cn" => Ok(MessageLocale::ZhCn),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for MessageLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of templates used by built-in rules and presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub required: String,
    pub not_in: String,
    pub boolean: String,
    pub integer: String,
    pub between_int: String,
    pub between_float: String,
    pub between_length: String,
    pub min_int: String,
    pub min_float: String,
    pub min_length: String,
    pub max_int: String,
    pub max_float: String,
    pub max_length: String,
    pub array_in: String,
    pub filter_char: String,
    pub distinct: String,
    // Presets
    pub malformed: String,
    pub invalid: String,
    pub start_at: String,
    pub birthday: String,
    pub username: String,
    pub real_name: String,
    pub password: String,
}

impl Messages {
    /// English templates
    pub fn english() -> Self {
        Self {
            required: "{name} must not be empty".into(),
            not_in: "{name} is not an allowed value".into(),
            boolean: "{name} must be true or false".into(),
            integer: "{name} must be an integer".into(),
            between_int: "{name} must be an integer between {min} and {max}".into(),
            between_float: "{name} must be a number between {min} and {max}".into(),
            between_length: "{name} must be {min} to {max} characters long".into(),
            min_int: "{name} must be an integer greater than or equal to {bound}".into(),
            min_float: "{name} must be a number greater than or equal to {bound}".into(),
            min_length: "{name} must be at least {bound} characters long".into(),
            max_int: "{name} must be an integer less than or equal to {bound}".into(),
            max_float: "{name} must be a number less than or equal to {bound}".into(),
            max_length: "{name} must be at most {bound} characters long".into(),
            array_in: "{name} must not contain values other than {values}".into(),
            filter_char: "{name} must not contain {values}".into(),
            distinct: "{name} contains duplicate value [{value}]".into(),
            malformed: "{name} is malformed".into(),
            invalid: "{name} is invalid".into(),
            start_at: "{name} must be a time in the past".into(),
            birthday: "{name} must be a date after {min} and before the current year".into(),
            username: "{name} must be 5-25 letters, digits or underscores, include a letter, \
                       and not start or end with an underscore"
                .into(),
            real_name: "{name} must be 1-20 characters of letters, digits, periods or CJK text"
                .into(),
            password: "{name} must be 8-32 characters mixing at least two of letters, digits \
                       and symbols"
                .into(),
        }
    }

    /// Simplified Chinese templates
    pub fn simplified_chinese() -> Self {
        Self {
            required: "{name} 不能为空".into(),
            not_in: "{name} 不存在".into(),
            boolean: "{name} 必须为 true 或 false".into(),
            integer: "{name} 必须是整数".into(),
            between_int: "{name} 必须是 {min} - {max} 之间的整数".into(),
            between_float: "{name} 必须是 {min} - {max} 之间数字".into(),
            between_length: "{name} 长度必须在 {min} - {max} 之间".into(),
            min_int: "{name} 必须是大等于 {bound} 的整数".into(),
            min_float: "{name} 必须是大等于 {bound} 的数字".into(),
            min_length: "{name} 长度不能小于 {bound}".into(),
            max_int: "{name} 必须是小等于 {bound} 的整数".into(),
            max_float: "{name} 必须是小等于 {bound} 的数字".into(),
            max_length: "{name} 长度不能大于 {bound}".into(),
            array_in: "{name} 不能含有 {values} 以外的值".into(),
            filter_char: "{name} 不允许包含 {values}".into(),
            distinct: "{name} 含有重复的值 [{value}]".into(),
            malformed: "{name} 格式不正确".into(),
            invalid: "{name} 格式错误".into(),
            start_at: "{name} 错误".into(),
            birthday: "{name} 必须介于 {min}年 - 至今 之间".into(),
            username: "{name} 5~25位数字字母下划线组合，必须包含字母，不能以下划线开头和结尾".into(),
            real_name: "{name} 1~20位中文，英文，数字，.的组合".into(),
            password: "{name} 8~32位字母，数字，特殊符号的组合，且包含2种以上组合".into(),
        }
    }

    pub fn for_locale(locale: MessageLocale) -> Self {
        match locale {
            MessageLocale::En => Self::english(),
            MessageLocale::ZhCn => Self::simplified_chinese(),
        }
    }

    /// Replace a single template by key.
    ///
    /// Returns `false` if `key` does not name a template.
    pub fn set(&mut self, key: &str, template: impl Into<String>) -> bool {
        let slot = match key {
            "required" => &mut self.required,
            "not_in" => &mut self.not_in,
            "boolean" => &mut self.boolean,
            "integer" => &mut self.integer,
            "between_int" => &mut self.between_int,
            "between_float" => &mut self.between_float,
            "between_length" => &mut self.between_length,
            "min_int" => &mut self.min_int,
            "min_float" => &mut self.min_float,
            "min_length" => &mut self.min_length,
            "max_int" => &mut self.max_int,
            "max_float" => &mut self.max_float,
            "max_length" => &mut self.max_length,
            "array_in" => &mut self.array_in,
            "filter_char" => &mut self.filter_char,
            "distinct" => &mut self.distinct,
            "malformed" => &mut self.malformed,
            "invalid" => &mut self.invalid,
            "start_at" => &mut self.start_at,
            "birthday" => &mut self.birthday,
            "username" => &mut self.username,
            "real_name" => &mut self.real_name,
            "password" => &mut self.password,
            _ => return false,
        };
        *slot = template.into();
        true
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

/// Substitute `{placeholder}`s in `template`.
///
/// ```
/// use paramguard_core::render;
///
/// let msg = render("{name} must be at most {bound}", &[("name", "Age"), ("bound", "150")]);
/// assert_eq!(msg, "Age must be at most 150");
/// ```
///
/// Substitution is a single pass over the template, so placeholders that
/// appear inside substituted values are left alone.
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            args.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                result.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

/// Render a list as `[a, b, c]`.
pub fn render_list<T: fmt::Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
