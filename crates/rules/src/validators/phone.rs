//! Mobile phone number validator with per-locale formats.
//!
//! Each supported locale has its own national pattern. The `any` locale
//! accepts a number valid in any supported locale, or a strict E.164 number
//! (`+` followed by 7 to 15 digits).

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::Validate;

/// Locale that accepts every supported format.
pub const ANY_LOCALE: &str = "any";

static LOCALE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        (
            "en-US",
            r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$",
        ),
        (
            "en-CA",
            r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$",
        ),
        ("en-GB", r"^(\+?44|0)7\d{9}$"),
        ("en-IN", r"^(\+?91|0)?[6789]\d{9}$"),
        ("en-AU", r"^(\+?61|0)4\d{8}$"),
        (
            "de-DE",
            r"^((\+49|0)1)(5[0-25-9]\d|6([23]|0\d?)|7([0-57-9]|6\d))\d{7,9}$",
        ),
        ("fr-FR", r"^(\+?33|0)[67]\d{8}$"),
        ("es-ES", r"^(\+?34)?[67]\d{8}$"),
        ("ja-JP", r"^(\+81[ \-]?(\(0\))?|0)[6789]0[ \-]?\d{4}[ \-]?\d{4}$"),
    ]
    .into_iter()
    .map(|(locale, pattern)| (locale, Regex::new(pattern).unwrap()))
    .collect()
});

static E164: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").unwrap());

/// Locales with a dedicated phone format, in lookup order.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    LOCALE_PATTERNS.iter().map(|(locale, _)| *locale)
}

/// Validates mobile phone numbers for one locale, or for all of them.
///
/// # Examples
///
/// ```
/// use formcheck_rules::validators::Phone;
/// use formcheck_rules::foundation::Validate;
///
/// let us = Phone::for_locale("en-US");
/// assert!(us.is_valid("(415) 555-1234"));
/// assert!(!us.is_valid("07123456789"));
///
/// let any = Phone::any();
/// assert!(any.is_valid("07123456789"));
/// assert!(any.is_valid("+4915123456789"));
/// ```
#[derive(Debug, Clone)]
pub struct Phone {
    locale: String,
    pattern: Option<&'static Regex>,
}

impl Phone {
    /// Accepts a number valid in any supported locale, or E.164.
    #[must_use]
    pub fn any() -> Self {
        Self {
            locale: ANY_LOCALE.to_string(),
            pattern: None,
        }
    }

    /// Restricts validation to one locale's format.
    ///
    /// An unsupported locale falls back to [`Phone::any`].
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        if locale == ANY_LOCALE {
            return Self::any();
        }
        match LOCALE_PATTERNS.iter().find(|(name, _)| *name == locale) {
            Some((name, pattern)) => Self {
                locale: (*name).to_string(),
                pattern: Some(pattern),
            },
            None => {
                tracing::warn!(locale, "unsupported phone locale, accepting any locale");
                Self::any()
            }
        }
    }

    /// The locale this validator checks against.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::any()
    }
}

impl Validate for Phone {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        match self.pattern {
            Some(pattern) => pattern.is_match(input),
            None => {
                E164.is_match(input)
                    || LOCALE_PATTERNS
                        .iter()
                        .any(|(_, pattern)| pattern.is_match(input))
            }
        }
    }
}
