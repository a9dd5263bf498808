#![forbid(unsafe_code)]

//! Unsigned arbitrary-precision binary numbers.
//!
//! Values are canonical '0'/'1' strings, most-significant digit first.
//! Every operation returns a fresh value; operands are never modified.

/// Canonical hash format version. Changing serialization requires a bump.
pub const FORMAT_VERSION: u32 = 1;

pub mod error;
pub mod value;
pub mod arithmetic;
pub mod bitwise;
pub mod ops;
pub mod hashing;
pub mod fixture;

pub use error::ParseBinaryError;
pub use value::BinaryValue;
