//! Bitwise OR / AND.
//!
//! Operands are right-aligned: the shorter one is padded with leading
//! zeros to the longer one's length before digits are combined.

use crate::value::BinaryValue;

impl BinaryValue {
    /// Digit-wise OR.
    pub fn or(&self, other: &BinaryValue) -> BinaryValue {
        self.combine_aligned(other, |x, y| x || y)
    }

    /// Digit-wise AND. Padding zeros left over in the result are stripped.
    pub fn and(&self, other: &BinaryValue) -> BinaryValue {
        self.combine_aligned(other, |x, y| x && y)
    }

    fn combine_aligned(&self, other: &BinaryValue, op: impl Fn(bool, bool) -> bool) -> BinaryValue {
        let width = self.bit_length().max(other.bit_length());
        let lhs = pad_with_zeros(self.value(), width);
        let rhs = pad_with_zeros(other.value(), width);

        let digits: String = lhs
            .chars()
            .zip(rhs.chars())
            .map(|(x, y)| if op(x == '1', y == '1') { '1' } else { '0' })
            .collect();
        BinaryValue::from_valid_digits(&digits)
    }
}

/// Left-pad `digits` with '0' up to `width` characters.
fn pad_with_zeros(digits: &str, width: usize) -> String {
    format!("{digits:0>width$}")
}
