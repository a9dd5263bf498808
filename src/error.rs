//! Strict parse errors.
//!
//! Only the `FromStr` path reports errors. The permissive constructor
//! never fails: invalid input becomes canonical zero.

use thiserror::Error;

/// Reasons a string is rejected by `str::parse::<BinaryValue>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBinaryError {
    #[error("empty binary string")]
    Empty,

    /// `index` counts characters, not bytes.
    #[error("invalid binary digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}
