//! Set membership validator

crate::validator! {
    /// Validates that a string is one of an allowed set of values.
    ///
    /// Comparison is exact and case-sensitive. Non-string values are
    /// compared by their text rendering, so `1` matches an allowed `"1"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_rules::validators::one_of;
    /// use formcheck_rules::foundation::Validate;
    /// use serde_json::json;
    ///
    /// let roles = one_of(["user", "admin"]);
    /// assert!(roles.is_valid("admin"));
    /// assert!(!roles.is_valid("Admin"));
    /// assert!(!roles.is_valid_value(&json!(null)));
    /// ```
    #[derive(PartialEq, Eq)]
    pub OneOf { allowed: Vec<String> } for str;
    rule(self, input) { self.allowed.iter().any(|candidate| candidate == input) }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_one_of() {
        let validator = one_of(["male", "female", "non-binary", "other"]);
        assert!(validator.is_valid("non-binary"));
        assert!(!validator.is_valid("unknown"));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn test_one_of_renders_numbers() {
        let validator = one_of(vec!["1".to_string(), "2".to_string()]);
        assert!(validator.is_valid_value(&json!(1)));
        assert!(!validator.is_valid_value(&json!(3)));
        assert!(!validator.is_valid_value(&json!(["1"])));
    }

    #[test]
    fn test_empty_set_rejects_everything() {
        let validator = one_of(Vec::<String>::new());
        assert!(!validator.is_valid("anything"));
    }
}
