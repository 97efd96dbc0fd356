//! Array and presence validators

use serde_json::Value;

crate::validator! {
    /// Validates that a value is a JSON array.
    pub IsArray for Value;
    rule(input) { input.is_array() }
    fn is_array();
}

crate::validator! {
    /// Validates that a value is present and not empty.
    ///
    /// `null`, `""` and `[]` are empty. Every other value passes, whatever
    /// its type, so this composes with [`IsArray`] without reporting a
    /// scalar twice.
    pub NotEmpty for Value;
    rule(input) {
        match input {
            Value::Null => false,
            Value::String(text) => !text.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => true,
        }
    }
    fn not_empty();
}
