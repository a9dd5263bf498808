//! Canonical hashing.
//!
//! Deterministic serialization of a sequence of values plus SHA-256.
//!
//! Rules:
//!   - `format_version` is the first field
//!   - values keep their given order, rendered as canonical digit strings
//!   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::value::BinaryValue;
use crate::FORMAT_VERSION;

/// Canonical serialization to UTF-8 JSON bytes.
pub fn canonical_serialize(values: &[BinaryValue]) -> Vec<u8> {
    build_canonical_value(values).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex.
pub fn canonical_hash(values: &[BinaryValue]) -> String {
    let digest = Sha256::digest(canonical_serialize(values));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn build_canonical_value(values: &[BinaryValue]) -> Value {
    // Map preserves insertion order (serde_json "preserve_order").
    let mut root = Map::new();
    root.insert(
        "format_version".to_string(),
        Value::Number(FORMAT_VERSION.into()),
    );
    root.insert(
        "values".to_string(),
        Value::Array(
            values
                .iter()
                .map(|v| Value::String(v.value().to_string()))
                .collect(),
        ),
    );
    Value::Object(root)
}
