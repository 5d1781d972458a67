// Predicates behind the presets
//
// Each function judges a single non-empty value. They are exposed so
// callers can compose them into their own rules.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("token pattern is valid"));

static OBJECT_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{24}$").expect("object id pattern is valid"));

pub(crate) static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("mobile pattern is valid"));

pub(crate) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z_.-]+@[0-9A-Za-z.-]+\.[A-Za-z.]+$").expect("email pattern is valid")
});

const ID_CARD_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const ID_CARD_CHECK_CODES: [u8; 11] = *b"10X98765432";

const DIGIT: u8 = 0b001;
const LETTER: u8 = 0b010;
const SYMBOL: u8 = 0b100;

/// Comma-separated positive integers, e.g. `1,3,4`
pub fn is_id_list(value: &str) -> bool {
    value
        .split(',')
        .all(|id| id.parse::<i64>().is_ok_and(|id| id > 0))
}

/// Comma-separated 32-character lowercase hex tokens
pub fn is_token_list(value: &str) -> bool {
    value.split(',').all(|token| TOKEN_REGEX.is_match(token))
}

/// 24-character lowercase hex identifier; empty passes
pub fn is_object_id(value: &str) -> bool {
    value.is_empty() || OBJECT_ID_REGEX.is_match(value)
}

/// Comma-separated object ids; empty passes
pub fn is_object_id_list(value: &str) -> bool {
    value.is_empty() || value.split(',').all(|id| OBJECT_ID_REGEX.is_match(id))
}

/// Mainland mobile number: 11 digits, `1` then `3`-`9`
pub fn is_mobile(value: &str) -> bool {
    MOBILE_REGEX.is_match(value)
}

/// Loose ASCII e-mail shape; not RFC 5322
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// 18-character resident identity number with a valid check code.
///
/// The first 17 characters must be digits. Their weighted sum modulo 11
/// selects the expected final character from `10X98765432`.
pub fn is_id_card_number(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 18 || !bytes[..17].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let sum: u32 = bytes[..17]
        .iter()
        .zip(ID_CARD_WEIGHTS)
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();

    bytes[17] == ID_CARD_CHECK_CODES[(sum % 11) as usize]
}

/// 5-25 ASCII letters, digits or underscores with at least one letter and
/// no leading or trailing underscore
pub fn is_username(value: &str) -> bool {
    (5..=25).contains(&value.len())
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        && value.bytes().any(|b| b.is_ascii_alphabetic())
        && !value.starts_with('_')
        && !value.ends_with('_')
}

/// 1-20 code points, each non-ASCII, an ASCII letter or digit, or `.`
pub fn is_real_name(value: &str) -> bool {
    (1..=20).contains(&value.chars().count())
        && value
            .chars()
            .all(|c| !c.is_ascii() || c.is_ascii_alphanumeric() || c == '.')
}

/// 8-32 printable ASCII characters drawing on at least two of: digits,
/// letters, symbols
pub fn is_password(value: &str) -> bool {
    if !(8..=32).contains(&value.chars().count()) {
        return false;
    }

    let mut mask = 0u8;
    for c in value.chars() {
        mask |= if c.is_ascii_digit() {
            DIGIT
        } else if c.is_ascii_alphabetic() {
            LETTER
        } else if c.is_ascii_punctuation() {
            SYMBOL
        } else {
            return false;
        };
    }

    mask.count_ones() >= 2
}

/// Strict `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Date whose year lies strictly between `min_year` and `current_year`.
/// Unparsable input is rejected outright.
pub fn is_birthday(value: &str, current_year: i32, min_year: i32) -> bool {
    match parse_date(value) {
        Some(date) => date.year() > min_year && date.year() < current_year,
        None => false,
    }
}

/// Unix timestamp in seconds strictly before `now`
pub fn is_past_timestamp(value: &str, now: i64) -> bool {
    value.parse::<i64>().is_ok_and(|ts| ts < now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1,3,4,5", true)]
    #[case("7", true)]
    #[case("1,a,b,3", false)]
    #[case("1,-,4,4,5", false)]
    #[case("0,1", false)]
    #[case("1,,2", false)]
    fn test_is_id_list(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_id_list(input), expected);
    }

    #[test]
    fn test_is_token_list() {
        let token = "0123456789abcdef0123456789abcdef";
        assert!(is_token_list(token));
        assert!(is_token_list(&format!("{token},{token}")));
        assert!(!is_token_list(&token.to_uppercase()));
        assert!(!is_token_list(&token[1..]));
    }

    #[rstest]
    #[case("110103200301013718", true)]
    #[case("11010519491231002X", true)]
    #[case("110103200301013719", false)]
    #[case("11010519491231002x", false)]
    #[case("1101032003010137", false)]
    #[case("11010320030101371A8", false)]
    #[case("A10103200301013718", false)]
    fn test_is_id_card_number(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_id_card_number(input), expected);
    }

    #[rstest]
    #[case("13501691436", true)]
    #[case("19999999999", true)]
    #[case("12909090909", false)]
    #[case("1350169143", false)]
    #[case("135016914360", false)]
    fn test_is_mobile(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_mobile(input), expected);
    }

    #[rstest]
    #[case("booldesign@163.com", true)]
    #[case("first.last-name@mail.example.org", true)]
    #[case("booldesign163.com", false)]
    #[case("user@localhost", false)]
    #[case("first_last@example.com", true)]
    #[case("user@my_host.com", false)]
    fn test_is_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_email(input), expected);
    }

    #[rstest]
    #[case("feg12_4", true)]
    #[case("244jjijiji", true)]
    #[case("244jjijttetq153535tny4yn4y4y4ijia", false)]
    #[case("1", false)]
    #[case("114155", false)]
    #[case("_gegg124", false)]
    #[case("我hi hi1515", false)]
    #[case("123_", false)]
    #[case("123w1_", false)]
    fn test_is_username(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_username(input), expected);
    }

    #[rstest]
    #[case("wei_jian", false)]
    #[case("weijianwen2", true)]
    #[case("wei.jianwen1", true)]
    #[case("卫建文", true)]
    #[case("卫建文_", false)]
    #[case("_卫建文", false)]
    #[case("wei jianwen", false)]
    #[case("一二三四五六七八九十一二三四五六七八九十", true)]
    #[case("一二三四五六七八九十一二三四五六七八九十一", false)]
    fn test_is_real_name(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_real_name(input), expected);
    }

    #[rstest]
    #[case("$$$$$$$a", true)]
    #[case("password1", true)]
    #[case("12345678!", true)]
    #[case("12345678", false)]
    #[case("abcdefgh", false)]
    #[case("!!!!!!!!", false)]
    #[case("abc123", false)]
    #[case("abc 12345", false)]
    #[case("密码password1", false)]
    fn test_is_password(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_password(input), expected);
    }

    #[test]
    fn test_object_ids() {
        let id = "507f1f77bcf86cd799439011";
        assert!(is_object_id(id));
        assert!(is_object_id(""));
        assert!(!is_object_id("507F1F77BCF86CD799439011"));
        assert!(is_object_id_list(&format!("{id},{id}")));
        assert!(!is_object_id_list(&format!("{id},")));
    }

    #[rstest]
    #[case("2011-12-31", true)]
    #[case("2030-01-01", false)]
    #[case("1900-01-01", false)]
    #[case("1905-06-01", false)]
    #[case("1906-01-01", true)]
    #[case("2026-01-01", false)]
    #[case("2011-02-30", false)]
    #[case("2011-1-05", false)]
    #[case("not a date", false)]
    fn test_is_birthday(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_birthday(input, 2026, 1905), expected);
    }

    #[test]
    fn test_is_past_timestamp() {
        let now = 1_700_000_000;
        assert!(is_past_timestamp("1616152846", now));
        assert!(!is_past_timestamp("1893427200", now));
        assert!(!is_past_timestamp("1700000000", now));
        assert!(!is_past_timestamp("yesterday", now));
    }
}
