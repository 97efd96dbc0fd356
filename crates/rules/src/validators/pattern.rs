//! Character-class and regular-expression validators
//!
//! The character-class validators are ASCII-only, matching the `en-US`
//! alphabet: `"José"` is not alphabetic here. Empty strings never match.

use regex::Regex;

crate::validator! {
    /// Validates that a string contains only ASCII letters.
    pub Alpha for str;
    rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphabetic()) }
    fn alpha();
}

crate::validator! {
    /// Validates that a string contains only ASCII letters and digits.
    pub Alphanumeric for str;
    rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphanumeric()) }
    fn alphanumeric();
}

crate::validator! {
    /// Validates that a string contains only Latin letters and whitespace.
    pub LatinText for str;
    rule(input) {
        !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    }
    fn latin_text();
}

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is used as given; anchor it (`^…$`) for whole-value
    /// matching.
    pub MatchesRegex { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    new(pattern: Regex) { Self { pattern } }
    fn matches_regex(pattern: Regex);
}
