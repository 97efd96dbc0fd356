//! Numeric range validators

crate::validator! {
    /// Validates that an integer lies within an inclusive range.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_rules::validators::int_range;
    /// use formcheck_rules::foundation::Validate;
    /// use serde_json::json;
    ///
    /// let validator = int_range(1, 100);
    /// assert!(validator.is_valid(&1));
    /// assert!(validator.is_valid_value(&json!("42")));
    /// assert!(!validator.is_valid_value(&json!(101)));
    /// assert!(!validator.is_valid_value(&json!(4.5)));
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IntRange { min: i64, max: i64 } for i64;
    rule(self, input) { (self.min..=self.max).contains(input) }
    fn int_range(min: i64, max: i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_int_range_boundaries() {
        let validator = int_range(1, 100);
        assert!(validator.is_valid(&1));
        assert!(validator.is_valid(&100));
        assert!(!validator.is_valid(&0));
        assert!(!validator.is_valid(&101));
    }

    #[test]
    fn test_int_range_rejects_non_integers() {
        let validator = int_range(1, 100);
        assert!(!validator.is_valid_value(&json!("ten")));
        assert!(!validator.is_valid_value(&json!(null)));
        assert!(!validator.is_valid_value(&json!(true)));
    }
}
