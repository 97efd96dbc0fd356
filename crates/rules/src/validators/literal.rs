//! Validators for literal encodings: JSON documents and boolean flags

use serde_json::Value;

/// String spellings accepted by [`BooleanLiteral`].
const BOOLEAN_SPELLINGS: [&str; 4] = ["true", "false", "1", "0"];

crate::validator! {
    /// Validates that a string parses as JSON.
    ///
    /// Any JSON value counts, including bare scalars such as `42`, `null`
    /// and `"text"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_rules::validators::json_document;
    /// use formcheck_rules::foundation::Validate;
    ///
    /// assert!(json_document().is_valid(r#"{"a": [1, 2]}"#));
    /// assert!(!json_document().is_valid("{a: 1}"));
    /// assert!(json_document().is_valid("42"));
    /// ```
    pub JsonDocument for str;
    rule(input) { serde_json::from_str::<Value>(input).is_ok() }
    fn json_document();
}

crate::validator! {
    /// Validates that a value is a boolean.
    ///
    /// Accepts JSON booleans, the strings `true`, `false`, `1` and `0`, and
    /// the numbers `1` and `0`.
    pub BooleanLiteral for Value;
    rule(input) {
        match input {
            Value::Bool(_) => true,
            Value::String(text) => BOOLEAN_SPELLINGS.contains(&text.as_str()),
            Value::Number(number) => matches!(number.as_u64(), Some(0 | 1)),
            _ => false,
        }
    }
    fn boolean_literal();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(r#"{"key": "value"}"#, true)]
    #[case("[]", true)]
    #[case("{}", true)]
    #[case("null", true)]
    #[case("\"text\"", true)]
    #[case("42", true)]
    #[case("true", true)]
    #[case("{'single': 1}", false)]
    #[case("{\"unterminated\": ", false)]
    #[case("", false)]
    fn test_json_document(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(json_document().is_valid(input), expected);
    }

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), true)]
    #[case(json!("true"), true)]
    #[case(json!("0"), true)]
    #[case(json!(1), true)]
    #[case(json!("yes"), false)]
    #[case(json!("TRUE"), false)]
    #[case(json!(2), false)]
    #[case(json!(null), false)]
    #[case(json!([true]), false)]
    fn test_boolean_literal(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(boolean_literal().is_valid_value(&input), expected);
    }
}
