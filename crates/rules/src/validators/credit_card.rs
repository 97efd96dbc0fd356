//! Payment card number validator

/// Shortest accepted card number, in digits.
const MIN_DIGITS: usize = 13;
/// Longest accepted card number, in digits.
const MAX_DIGITS: usize = 19;

crate::validator! {
    /// Validates a payment card number.
    ///
    /// Spaces and dashes are ignored. What remains must be 13 to 19 ASCII
    /// digits with a valid Luhn checksum.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_rules::validators::credit_card;
    /// use formcheck_rules::foundation::Validate;
    ///
    /// assert!(credit_card().is_valid("4111 1111 1111 1111"));
    /// assert!(!credit_card().is_valid("4111 1111 1111 1112"));
    /// ```
    pub CreditCard for str;
    rule(input) {
        let digits: Vec<u32> = input
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .map(|c| c.to_digit(10))
            .collect::<Option<_>>()
            .unwrap_or_default();
        (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) && luhn_checksum(&digits) == 0
    }
    fn credit_card();
}

/// Luhn checksum over decimal digits; a valid number yields 0.
fn luhn_checksum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum::<u32>()
        % 10
}
