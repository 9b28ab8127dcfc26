//! Structural checks for loosely typed add requests (e.g. deserialized data).

use serde_json::Value;

use stockroom_core::{DomainError, DomainResult, ItemName};

/// Validate a `(name, quantity)` pair coming from untyped input.
///
/// `name` must be a non-empty JSON string and `quantity` a JSON integer that
/// fits in `i64`. Floats, booleans and numeric strings are rejected. Negative
/// integers pass; this is a type check, not a range check.
pub fn parse_add_input(name: &Value, quantity: &Value) -> DomainResult<(ItemName, i64)> {
    let name = match name {
        Value::String(raw) => ItemName::parse(raw.as_str())?,
        other => {
            return Err(DomainError::validation(format!(
                "item name must be a string, got {other}"
            )));
        }
    };

    let quantity = quantity.as_i64().ok_or_else(|| {
        DomainError::validation(format!("quantity must be an integer, got {quantity}"))
    })?;

    Ok((name, quantity))
}
