//! Currency amount validator

use regex::Regex;

use crate::foundation::Validate;

/// Default currency symbol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Validates a symbol-prefixed decimal amount such as `$100.00`.
///
/// The symbol is required and matched literally. Whole units are one or more
/// digits, optionally followed by one or two fraction digits.
///
/// # Examples
///
/// ```
/// use formcheck_rules::validators::Currency;
/// use formcheck_rules::foundation::Validate;
///
/// let dollars = Currency::new("$");
/// assert!(dollars.is_valid("$100.00"));
/// assert!(!dollars.is_valid("100.00"));
/// assert!(!dollars.is_valid("$100.123"));
/// ```
#[derive(Debug, Clone)]
pub struct Currency {
    symbol: String,
    pattern: Option<Regex>,
}

impl Currency {
    /// Creates a validator for amounts prefixed with `symbol`.
    #[must_use]
    pub fn new(symbol: &str) -> Self {
        let source = format!(r"^{}[0-9]+(?:\.[0-9]{{1,2}})?$", regex::escape(symbol));
        let pattern = match Regex::new(&source) {
            Ok(pattern) => Some(pattern),
            Err(error) => {
                tracing::warn!(
                    symbol,
                    %error,
                    "unusable currency symbol, every value will be rejected"
                );
                None
            }
        };
        Self {
            symbol: symbol.to_string(),
            pattern,
        }
    }

    /// The configured symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Validate for Currency {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        self.pattern.as_ref().is_some_and(|pattern| pattern.is_match(input))
    }
}
