//! Failure messages and value sanitizers attached to Checks

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

// ============================================================================
// MESSAGE
// ============================================================================

type Formatter = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// The failure message of a Check.
///
/// Either fixed text, or a formatter that may mention the rejected value.
/// Formatters capture only immutable configuration, so the message of a
/// given Check and value never changes between evaluations.
///
/// # Examples
///
/// ```
/// use formcheck_rules::chain::Message;
/// use serde_json::json;
///
/// let fixed = Message::from("role is required");
/// assert_eq!(fixed.resolve(&json!(null)), "role is required");
///
/// let dynamic = Message::dynamic(|value| format!("{value} is not allowed"));
/// assert_eq!(dynamic.resolve(&json!("root")), "\"root\" is not allowed");
/// ```
#[derive(Clone)]
pub enum Message {
    /// Fixed text.
    Text(Arc<str>),
    /// Text rendered from the rejected value.
    Dynamic(Formatter),
}

impl Message {
    /// Creates a fixed message.
    pub fn text(text: impl Into<Arc<str>>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a message rendered from the rejected value.
    pub fn dynamic(render: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(render))
    }

    /// Renders the message for `value`.
    #[must_use]
    pub fn resolve(&self, value: &Value) -> String {
        match self {
            Self::Text(text) => text.to_string(),
            Self::Dynamic(render) => render(value),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// Renders a value for use inside a message: strings without quotes,
/// everything else as JSON.
pub(crate) fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

// ============================================================================
// SANITIZE
// ============================================================================

/// Normalization applied to a value before a Check tests it.
///
/// Only strings are touched; other values pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sanitize {
    /// Test the value as given.
    #[default]
    None,
    /// Strip leading and trailing whitespace.
    Trim,
    /// Strip surrounding whitespace and lowercase.
    TrimLowercase,
}

impl Sanitize {
    /// Applies the normalization, borrowing when nothing changes.
    #[must_use]
    pub fn apply<'a>(&self, value: &'a Value) -> Cow<'a, Value> {
        let Value::String(text) = value else {
            return Cow::Borrowed(value);
        };
        match self {
            Self::None => Cow::Borrowed(value),
            Self::Trim => {
                let trimmed = text.trim();
                if trimmed.len() == text.len() {
                    Cow::Borrowed(value)
                } else {
                    Cow::Owned(Value::String(trimmed.to_string()))
                }
            }
            Self::TrimLowercase => Cow::Owned(Value::String(text.trim().to_lowercase())),
        }
    }
}
