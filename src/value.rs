//! Canonical binary values.
//!
//! A `BinaryValue` holds its digits most-significant first, with no
//! leading zeros except for the single digit "0". The digits are fixed
//! at construction and never change afterwards.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseBinaryError;

/// Canonical digit string for zero.
const ZERO_DIGITS: &str = "0";

/// Unsigned arbitrary-precision binary number.
///
/// Equality is numeric equality because the representation is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BinaryValue {
    digits: Box<str>,
}

impl BinaryValue {
    /// Build a value from raw characters.
    ///
    /// Any character other than '0' or '1' makes the whole value zero.
    /// This is a silent fallback, not an error; use `str::parse` for
    /// strict validation. Leading zeros are stripped and an empty input
    /// is zero.
    pub fn new(raw: &str) -> Self {
        if let Some((index, found)) = first_invalid_digit(raw) {
            tracing::debug!(index, ?found, "non-binary input collapsed to zero");
            return Self::zero();
        }
        Self::from_valid_digits(raw)
    }

    /// Canonical zero ("0").
    pub fn zero() -> Self {
        Self {
            digits: ZERO_DIGITS.into(),
        }
    }

    /// Canonicalize a digit string already known to contain only '0'/'1'.
    pub(crate) fn from_valid_digits(digits: &str) -> Self {
        debug_assert!(first_invalid_digit(digits).is_none());
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Self::zero()
        } else {
            Self {
                digits: significant.into(),
            }
        }
    }

    /// The canonical digit string.
    pub fn value(&self) -> &str {
        &self.digits
    }

    /// Number of canonical digits. Zero has one digit.
    pub fn bit_length(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        &*self.digits == ZERO_DIGITS
    }

    /// Native value, or `None` if more than 64 bits are needed.
    pub fn to_u64(&self) -> Option<u64> {
        if self.bit_length() > 64 {
            return None;
        }
        u64::from_str_radix(&self.digits, 2).ok()
    }

    /// Digits as ASCII bytes, most-significant first.
    pub(crate) fn bits(&self) -> &[u8] {
        self.digits.as_bytes()
    }
}

/// Position and character of the first non-binary character, if any.
fn first_invalid_digit(raw: &str) -> Option<(usize, char)> {
    raw.chars()
        .enumerate()
        .find(|&(_, ch)| ch != '0' && ch != '1')
}

impl Default for BinaryValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BinaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl FromStr for BinaryValue {
    type Err = ParseBinaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBinaryError::Empty);
        }
        if let Some((index, found)) = first_invalid_digit(s) {
            return Err(ParseBinaryError::InvalidDigit { index, found });
        }
        Ok(Self::from_valid_digits(s))
    }
}

impl From<&str> for BinaryValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for BinaryValue {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<u64> for BinaryValue {
    fn from(n: u64) -> Self {
        // `{:b}` never emits leading zeros and renders 0 as "0".
        Self {
            digits: format!("{n:b}").into(),
        }
    }
}

impl From<BinaryValue> for String {
    fn from(value: BinaryValue) -> Self {
        value.digits.into()
    }
}

impl Ord for BinaryValue {
    /// Numeric order: a longer canonical string is always larger.
    fn cmp(&self, other: &Self) -> Ordering {
        self.bit_length()
            .cmp(&other.bit_length())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for BinaryValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_leading_zeros() {
        assert_eq!(BinaryValue::new("000101").value(), "101");
        assert_eq!(BinaryValue::new("1").value(), "1");
        assert_eq!(BinaryValue::new("10").value(), "10");
    }

    #[test]
    fn test_new_empty_and_all_zeros_are_zero() {
        assert_eq!(BinaryValue::new("").value(), "0");
        assert_eq!(BinaryValue::new("000").value(), "0");
        assert_eq!(BinaryValue::new("0").value(), "0");
    }

    #[test]
    fn test_new_invalid_input_falls_back_to_zero() {
        // Permissive by contract: no error, just zero.
        assert_eq!(BinaryValue::new("12a").value(), "0");
        assert_eq!(BinaryValue::new("1012").value(), "0");
        assert_eq!(BinaryValue::new(" 101").value(), "0");
        assert_eq!(BinaryValue::new("0b101").value(), "0");
    }

    #[test]
    fn test_recanonicalization_is_idempotent() {
        for raw in ["0", "1", "000110", "111", "", "x"] {
            let once = BinaryValue::new(raw);
            let twice = BinaryValue::new(once.value());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_parse_accepts_valid_digits() {
        let v: BinaryValue = "00110".parse().unwrap();
        assert_eq!(v.value(), "110");
        let z: BinaryValue = "000".parse().unwrap();
        assert!(z.is_zero());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<BinaryValue>(), Err(ParseBinaryError::Empty));
    }

    #[test]
    fn test_parse_reports_first_invalid_digit() {
        assert_eq!(
            "12a".parse::<BinaryValue>(),
            Err(ParseBinaryError::InvalidDigit { index: 1, found: '2' })
        );
        let err = "01é1".parse::<BinaryValue>().unwrap_err();
        assert_eq!(err, ParseBinaryError::InvalidDigit { index: 2, found: 'é' });
        assert_eq!(err.to_string(), "invalid binary digit 'é' at index 2");
    }

    #[test]
    fn test_u64_conversions() {
        assert_eq!(BinaryValue::from(0u64).value(), "0");
        assert_eq!(BinaryValue::from(6u64).value(), "110");
        assert_eq!(BinaryValue::from(u64::MAX).bit_length(), 64);
        assert_eq!(BinaryValue::new("110").to_u64(), Some(6));
        assert_eq!(BinaryValue::from(u64::MAX).to_u64(), Some(u64::MAX));

        let wide = format!("1{}", "0".repeat(64));
        assert_eq!(BinaryValue::new(&wide).to_u64(), None);
    }

    #[test]
    fn test_numeric_ordering() {
        let two = BinaryValue::new("10");
        let three = BinaryValue::new("11");
        let four = BinaryValue::new("100");
        assert!(two < three);
        assert!(three < four);
        assert!(BinaryValue::zero() < two);
        assert_eq!(BinaryValue::new("0011").cmp(&three), Ordering::Equal);
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(BinaryValue::default().to_string(), "0");
        assert_eq!(BinaryValue::new("0101").to_string(), "101");
        assert_eq!(String::from(BinaryValue::new("11")), "11");
    }

    #[test]
    fn test_serde_uses_digit_string() {
        let v = BinaryValue::new("1101");
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"1101\"");

        let back: BinaryValue = serde_json::from_str("\"0011\"").unwrap();
        assert_eq!(back.value(), "11");

        // Deserialization goes through the permissive constructor.
        let bad: BinaryValue = serde_json::from_str("\"12\"").unwrap();
        assert!(bad.is_zero());
    }
}
