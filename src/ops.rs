//! Operator overloads.
//!
//! `+`, `|`, `&` and `*` delegate to the named operations; `*` is the
//! exact product.

use std::ops::{Add, BitAnd, BitOr, Mul};

use crate::value::BinaryValue;

macro_rules! forward_binop {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait<&BinaryValue> for &BinaryValue {
            type Output = BinaryValue;

            fn $method(self, rhs: &BinaryValue) -> BinaryValue {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl $trait for BinaryValue {
            type Output = BinaryValue;

            fn $method(self, rhs: BinaryValue) -> BinaryValue {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, |a, b| BinaryValue::add(a, b));
forward_binop!(BitOr, bitor, |a, b| a.or(b));
forward_binop!(BitAnd, bitand, |a, b| a.and(b));
forward_binop!(Mul, mul, |a, b| a.multiply(b));
