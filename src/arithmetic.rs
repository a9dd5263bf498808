//! Arithmetic on binary values.
//!
//! Unsigned, unbounded. Every result is built through canonicalization,
//! so no operation ever returns leading zeros.

use crate::value::BinaryValue;

impl BinaryValue {
    /// Unsigned sum by ripple-carry addition.
    ///
    /// Digits are consumed from the least-significant end while either
    /// operand has digits left or a carry is pending. The result grows as
    /// needed; there is no fixed width.
    pub fn add(a: &BinaryValue, b: &BinaryValue) -> BinaryValue {
        let mut lhs = a.bits().iter().rev();
        let mut rhs = b.bits().iter().rev();
        let mut carry = 0u8;
        let mut lsb_first = Vec::with_capacity(a.bit_length().max(b.bit_length()) + 1);

        loop {
            let x = lhs.next();
            let y = rhs.next();
            if x.is_none() && y.is_none() && carry == 0 {
                break;
            }
            let sum = carry + x.map_or(0, |d| d - b'0') + y.map_or(0, |d| d - b'0');
            lsb_first.push(b'0' + sum % 2);
            carry = sum / 2;
        }

        let digits: String = lsb_first.iter().rev().map(|&d| char::from(d)).collect();
        BinaryValue::from_valid_digits(&digits)
    }

    /// Unsigned product by shift-and-add.
    ///
    /// Walks `other` from its most-significant digit. At step `i` the
    /// working value is `self` shifted left by the number of digits of
    /// `other` still below position `i`; it is added to the product
    /// whenever the digit at `i` is '1'.
    pub fn multiply(&self, other: &BinaryValue) -> BinaryValue {
        tracing::trace!(lhs = %self, rhs = %other, "multiply");

        let mut product = BinaryValue::zero();
        let mut shifted = String::with_capacity(self.bit_length() + other.bit_length());
        shifted.push_str(self.value());
        shifted.extend(std::iter::repeat('0').take(other.bit_length() - 1));

        for &bit in other.bits() {
            if bit == b'1' {
                product = BinaryValue::add(&product, &BinaryValue::from_valid_digits(&shifted));
            }
            shifted.pop();
        }

        product
    }

    /// Shift-and-add with a fixed-width working value.
    ///
    /// The working value keeps `self`'s length: after each digit of `other`
    /// its most-significant digit is dropped and a '0' appended. High bits
    /// are therefore lost and the result is NOT the product in general
    /// (`11 × 10` gives `11`). [`BinaryValue::multiply`] computes the true
    /// product.
    pub fn multiply_fixed_width(&self, other: &BinaryValue) -> BinaryValue {
        tracing::trace!(lhs = %self, rhs = %other, "multiply_fixed_width");

        let mut product = BinaryValue::zero();
        let mut working = self.value().to_owned();

        for &bit in other.bits() {
            if bit == b'1' {
                product = BinaryValue::add(&product, &BinaryValue::from_valid_digits(&working));
            }
            working.remove(0);
            working.push('0');
        }

        product
    }
}
