//! Coercion of record values into the typed inputs validators work on.
//!
//! The pipeline hands every Check a `serde_json::Value`. Validators are
//! written against plain Rust types (`str`, `i64`, `bool`, `[Value]`), and
//! `AsValidatable` bridges the two. Text coercion follows the request-payload
//! convention: numbers and booleans are rendered as their textual form, while
//! `null`, arrays and objects are type mismatches.

use std::borrow::{Borrow, Cow};

use serde_json::Value;

use crate::foundation::TypeMismatch;

/// Types that can be viewed as the input of a validator.
///
/// Uses a GAT so conversions can hand out either a borrow or an owned value,
/// unified through `Borrow`.
pub trait AsValidatable<T: ?Sized> {
    /// The converted form, borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts `self` for validation.
    fn as_validatable(&self) -> Result<Self::Output<'_>, TypeMismatch>;
}

/// Name of a JSON value's type, as used in mismatch reports.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const fn mismatch(expected: &'static str, actual: &'static str) -> TypeMismatch {
    TypeMismatch { expected, actual }
}

// ============================================================================
// REFLEXIVE
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, TypeMismatch> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, TypeMismatch> {
        Ok(self.as_str())
    }
}

impl AsValidatable<i64> for i64 {
    type Output<'a> = i64;

    #[inline]
    fn as_validatable(&self) -> Result<i64, TypeMismatch> {
        Ok(*self)
    }
}

// ============================================================================
// JSON VALUES
// ============================================================================

impl AsValidatable<str> for Value {
    type Output<'a>
        = Cow<'a, str>
    where
        Self: 'a;

    fn as_validatable(&self) -> Result<Cow<'_, str>, TypeMismatch> {
        match self {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Ok(Cow::Owned(n.to_string())),
            Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
            other => Err(mismatch("string", json_type_name(other))),
        }
    }
}

impl AsValidatable<i64> for Value {
    type Output<'a> = i64;

    /// Integers, or strings holding an optionally signed run of digits.
    fn as_validatable(&self) -> Result<i64, TypeMismatch> {
        match self {
            Value::Number(n) => n.as_i64().ok_or(mismatch("integer", "number")),
            Value::String(s) => {
                let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(mismatch("integer", "string"));
                }
                s.parse::<i64>().map_err(|_| mismatch("integer", "string"))
            }
            other => Err(mismatch("integer", json_type_name(other))),
        }
    }
}

impl AsValidatable<bool> for Value {
    type Output<'a> = bool;

    fn as_validatable(&self) -> Result<bool, TypeMismatch> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("boolean", json_type_name(other))),
        }
    }
}

impl AsValidatable<[Value]> for Value {
    type Output<'a>
        = &'a [Value]
    where
        Self: 'a;

    fn as_validatable(&self) -> Result<&[Value], TypeMismatch> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(mismatch("array", json_type_name(other))),
        }
    }
}

impl AsValidatable<Value> for Value {
    type Output<'a>
        = &'a Value
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&Value, TypeMismatch> {
        Ok(self)
    }
}
