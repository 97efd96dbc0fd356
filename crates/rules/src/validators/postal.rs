//! Postal code validator with per-locale formats.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::Validate;

/// Default postal locale.
pub const DEFAULT_POSTAL_LOCALE: &str = "US";

static US_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(?:[-\s]?\d{4})?$").unwrap());

static LOCALE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("CA", r"^[ABCEGHJKLMNPRSTVXY]\d[ABCEGHJ-NPRSTV-Z][\s-]?\d[ABCEGHJ-NPRSTV-Z]\d$"),
        ("GB", r"(?i)^(gir\s?0aa|[a-z]{1,2}\d[\da-z]?\s?(\d[a-z]{2})?)$"),
        ("DE", r"^\d{5}$"),
        ("FR", r"^\d{2}\s?\d{3}$"),
        ("IN", r"^([1-9]\d{2}\s?\d{3})$"),
        ("JP", r"^\d{3}-\d{4}$"),
        ("AU", r"^\d{4}$"),
    ]
    .into_iter()
    .map(|(locale, pattern)| (locale, Regex::new(pattern).unwrap()))
    .collect()
});

/// Validates postal codes for one locale.
///
/// # Examples
///
/// ```
/// use formcheck_rules::validators::PostalCode;
/// use formcheck_rules::foundation::Validate;
///
/// assert!(PostalCode::for_locale("US").is_valid("94105-1234"));
/// assert!(PostalCode::for_locale("CA").is_valid("K1A 0B1"));
/// assert!(!PostalCode::for_locale("DE").is_valid("1234"));
/// ```
#[derive(Debug, Clone)]
pub struct PostalCode {
    locale: String,
    pattern: &'static Regex,
}

impl PostalCode {
    /// Creates a validator for `locale`.
    ///
    /// An unsupported locale falls back to the US format.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        if locale == DEFAULT_POSTAL_LOCALE {
            return Self::default();
        }
        match LOCALE_PATTERNS.iter().find(|(name, _)| *name == locale) {
            Some((_, pattern)) => Self {
                locale: locale.to_string(),
                pattern,
            },
            None => {
                tracing::warn!(locale, "unsupported postal locale, using the US format");
                Self {
                    locale: locale.to_string(),
                    pattern: &US_PATTERN,
                }
            }
        }
    }

    /// The configured locale, as given.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for PostalCode {
    fn default() -> Self {
        Self {
            locale: DEFAULT_POSTAL_LOCALE.to_string(),
            pattern: &US_PATTERN,
        }
    }
}

impl Validate for PostalCode {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("US", "94105", true)]
    #[case("US", "94105-1234", true)]
    #[case("US", "94105 1234", true)]
    #[case("US", "941051234", true)]
    #[case("US", "9410", false)]
    #[case("US", "94105-12", false)]
    #[case("CA", "K1A0B1", true)]
    #[case("CA", "D1A 0B1", false)]
    #[case("GB", "SW1A 1AA", true)]
    #[case("GB", "gir 0aa", true)]
    #[case("DE", "10115", true)]
    #[case("FR", "75 001", true)]
    #[case("IN", "110001", true)]
    #[case("IN", "010001", false)]
    #[case("JP", "100-0001", true)]
    #[case("JP", "1000001", false)]
    #[case("AU", "2000", true)]
    fn test_locale_formats(#[case] locale: &str, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(PostalCode::for_locale(locale).is_valid(input), expected);
    }

    #[test]
    fn test_unknown_locale_uses_us_format() {
        let validator = PostalCode::for_locale("ZZ");
        assert_eq!(validator.locale(), "ZZ");
        assert!(validator.is_valid("12345"));
        assert!(!validator.is_valid("K1A 0B1"));
    }
}
