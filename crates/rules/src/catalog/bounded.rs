//! Bounded-value builders: integer range, currency, arrays and postal codes

use serde::Deserialize;

use crate::chain::{Check, CheckChain};
use crate::validators::{
    Currency, DEFAULT_CURRENCY_SYMBOL, DEFAULT_POSTAL_LOCALE, PostalCode, int_range, is_array,
    not_empty,
};

field_config! {
    /// Configuration for [`check_array`].
    ArrayConfig => "items"
}

/// Configuration for [`check_number`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    /// Field the chain validates.
    pub field: String,
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            field: "number".to_string(),
            min: 1,
            max: 100,
        }
    }
}

impl NumberConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the inclusive bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

/// Configuration for [`check_currency`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Field the chain validates.
    pub field: String,
    /// Symbol every amount must start with.
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            field: "amount".to_string(),
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl CurrencyConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the currency symbol.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }
}

/// Configuration for [`check_postal_code`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostalCodeConfig {
    /// Field the chain validates.
    pub field: String,
    /// Country code (`US`, `CA`, `GB`, ...).
    pub locale: String,
}

impl Default for PostalCodeConfig {
    fn default() -> Self {
        Self {
            field: "postalCode".to_string(),
            locale: DEFAULT_POSTAL_LOCALE.to_string(),
        }
    }
}

impl PostalCodeConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// An integer within `[min, max]`. Digit strings such as `"42"` count as
/// integers; decimals do not.
#[must_use]
pub fn check_number(config: &NumberConfig) -> CheckChain {
    let NumberConfig { field, min, max } = config;
    CheckChain::new(field.as_str())
        .with(Check::from_validator(
            field.as_str(),
            "range",
            int_range(*min, *max),
            format!("{field} must be a number between {min} and {max}"),
        ))
        .built("check_number")
}

/// A symbol-prefixed amount with at most two fraction digits.
#[must_use]
pub fn check_currency(config: &CurrencyConfig) -> CheckChain {
    let CurrencyConfig { field, symbol } = config;
    CheckChain::new(field.as_str())
        .with(Check::from_validator(
            field.as_str(),
            "currency",
            Currency::new(symbol),
            format!("{field} must be a valid currency amount (e.g., {symbol}100.00)"),
        ))
        .built("check_currency")
}

/// A non-empty array. Two Checks: array type, then non-empty. A scalar
/// only fails the first; `null` fails both.
#[must_use]
pub fn check_array(config: &ArrayConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "array",
            is_array(),
            format!("{field} must be an array"),
        ))
        .with(Check::from_validator(
            field,
            "not_empty",
            not_empty(),
            format!("{field} cannot be empty"),
        ))
        .built("check_array")
}

/// A postal code in the configured country's format. Unknown countries
/// use the US format.
#[must_use]
pub fn check_postal_code(config: &PostalCodeConfig) -> CheckChain {
    let PostalCodeConfig { field, locale } = config;
    CheckChain::new(field.as_str())
        .with(Check::from_validator(
            field.as_str(),
            "postal_code",
            PostalCode::for_locale(locale),
            format!("{field} must be a valid postal code for locale {locale}"),
        ))
        .built("check_postal_code")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ShortCircuit;
    use serde_json::{Value, json};

    async fn messages(chain: &CheckChain, value: Value) -> Vec<String> {
        chain
            .evaluate(&value, ShortCircuit::Continue)
            .await
            .messages()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_number_bounds() {
        let chain = check_number(&NumberConfig::for_field("age").with_bounds(18, 120));
        assert!(messages(&chain, json!(18)).await.is_empty());
        assert!(messages(&chain, json!("120")).await.is_empty());
        assert_eq!(
            messages(&chain, json!(17)).await,
            ["age must be a number between 18 and 120"]
        );
        assert_eq!(messages(&chain, json!(18.5)).await.len(), 1);
    }

    #[tokio::test]
    async fn test_currency_message_names_symbol() {
        let chain = check_currency(&CurrencyConfig::for_field("price").with_symbol("\u{20ac}"));
        assert!(messages(&chain, json!("\u{20ac}9.99")).await.is_empty());
        assert_eq!(
            messages(&chain, json!("9.99")).await,
            ["price must be a valid currency amount (e.g., \u{20ac}100.00)"]
        );
    }

    #[tokio::test]
    async fn test_array_checks() {
        let chain = check_array(&ArrayConfig::default());
        assert_eq!(chain.names(), ["array", "not_empty"]);
        assert!(messages(&chain, json!(["a"])).await.is_empty());
        assert_eq!(messages(&chain, json!([])).await, ["items cannot be empty"]);
        assert_eq!(messages(&chain, json!("a")).await, ["items must be an array"]);
        assert_eq!(messages(&chain, json!(7)).await, ["items must be an array"]);
        assert_eq!(
            messages(&chain, json!(null)).await,
            ["items must be an array", "items cannot be empty"]
        );
    }

    #[tokio::test]
    async fn test_postal_code() {
        let us = check_postal_code(&PostalCodeConfig::default());
        assert!(messages(&us, json!("12345-6789")).await.is_empty());
        assert_eq!(
            messages(&us, json!("ABC")).await,
            ["postalCode must be a valid postal code for locale US"]
        );

        let ca = check_postal_code(&PostalCodeConfig::default().with_locale("CA"));
        assert!(messages(&ca, json!("K1A 0B1")).await.is_empty());
    }
}
