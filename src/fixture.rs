//! Fixture cases.
//!
//! A case names an operation and two raw operand strings. Operands are
//! kept raw so fixtures can exercise the permissive constructor.

use serde::{Deserialize, Serialize};

use crate::value::BinaryValue;

/// Binary operation selectable from a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Or,
    And,
    Multiply,
    MultiplyFixedWidth,
}

impl Operation {
    pub fn apply(self, lhs: &BinaryValue, rhs: &BinaryValue) -> BinaryValue {
        match self {
            Operation::Add => BinaryValue::add(lhs, rhs),
            Operation::Or => lhs.or(rhs),
            Operation::And => lhs.and(rhs),
            Operation::Multiply => lhs.multiply(rhs),
            Operation::MultiplyFixedWidth => lhs.multiply_fixed_width(rhs),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureCase {
    pub op: Operation,
    pub lhs: String,
    pub rhs: String,
    pub expected: String,
}

impl FixtureCase {
    /// Construct both operands and apply the operation.
    pub fn evaluate(&self) -> BinaryValue {
        let lhs = BinaryValue::new(&self.lhs);
        let rhs = BinaryValue::new(&self.rhs);
        self.op.apply(&lhs, &rhs)
    }

    pub fn passes(&self) -> bool {
        self.evaluate().value() == self.expected
    }
}

/// Parse a JSON array of cases.
pub fn load_cases(json: &str) -> serde_json::Result<Vec<FixtureCase>> {
    serde_json::from_str(json)
}

/// Evaluate every case in order.
pub fn evaluate_all(cases: &[FixtureCase]) -> Vec<BinaryValue> {
    cases.iter().map(FixtureCase::evaluate).collect()
}
