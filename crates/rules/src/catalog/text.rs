//! Text builders: length, character classes and custom patterns

use regex::Regex;
use serde::Deserialize;

use crate::chain::{Check, CheckChain};
use crate::foundation::ConfigError;
use crate::validators::{alpha, alphanumeric, latin_text, length_range, matches_regex};

/// Message used by [`check_custom_pattern`] when none is configured.
pub const DEFAULT_PATTERN_MESSAGE: &str = "Invalid input format";

field_config! {
    /// Configuration for [`check_alphanumeric`].
    AlphanumericConfig => "text"
}

field_config! {
    /// Configuration for [`check_alpha`].
    AlphaConfig => "text"
}

field_config! {
    /// Configuration for [`check_city_name`].
    CityNameConfig => "city"
}

field_config! {
    /// Configuration for [`check_latin_text`].
    LatinTextConfig => "text"
}

/// Configuration for [`check_length`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LengthConfig {
    /// Field the chain validates.
    pub field: String,
    /// Shortest accepted length, in characters.
    pub min: usize,
    /// Longest accepted length, in characters.
    pub max: usize,
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            field: "text".to_string(),
            min: 4,
            max: 16,
        }
    }
}

impl LengthConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the inclusive bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

/// Configuration for [`check_street_address`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StreetAddressConfig {
    /// Field the chain validates.
    pub field: String,
    /// Shortest accepted length, in characters.
    pub min: usize,
    /// Longest accepted length, in characters.
    pub max: usize,
}

impl Default for StreetAddressConfig {
    fn default() -> Self {
        Self {
            field: "address".to_string(),
            min: 5,
            max: 100,
        }
    }
}

impl StreetAddressConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }
}

/// Configuration for [`check_custom_pattern`].
///
/// The pattern has no meaningful default and must always be given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternConfig {
    /// Field the chain validates.
    #[serde(default = "PatternConfig::default_field")]
    pub field: String,
    /// Regular expression the value must match. Anchor it for whole-value
    /// matching.
    pub pattern: String,
    /// Failure message, used verbatim.
    #[serde(default = "PatternConfig::default_message")]
    pub message: String,
}

impl PatternConfig {
    /// Configuration matching `pattern` on the default field.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            field: Self::default_field(),
            pattern: pattern.into(),
            message: Self::default_message(),
        }
    }

    /// Sets the field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Sets the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn default_field() -> String {
        "text".to_string()
    }

    fn default_message() -> String {
        DEFAULT_PATTERN_MESSAGE.to_string()
    }
}

/// Length in characters within `[min, max]`.
#[must_use]
pub fn check_length(config: &LengthConfig) -> CheckChain {
    let LengthConfig { field, min, max } = config;
    CheckChain::new(field.as_str())
        .with(Check::from_validator(
            field.as_str(),
            "length",
            length_range(*min, *max),
            format!("{field} must be between {min} and {max} characters"),
        ))
        .built("check_length")
}

/// ASCII letters and digits only.
#[must_use]
pub fn check_alphanumeric(config: &AlphanumericConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "alphanumeric",
            alphanumeric(),
            format!("{field} can only contain letters and numbers"),
        ))
        .built("check_alphanumeric")
}

/// ASCII letters only.
#[must_use]
pub fn check_alpha(config: &AlphaConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(alpha_check(field))
        .built("check_alpha")
}

/// City names: ASCII letters only, like [`check_alpha`].
#[must_use]
pub fn check_city_name(config: &CityNameConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(alpha_check(field))
        .built("check_city_name")
}

fn alpha_check(field: &str) -> Check {
    Check::from_validator(
        field,
        "alpha",
        alpha(),
        format!("{field} can only contain alphabetic characters"),
    )
}

/// Latin letters and whitespace only.
#[must_use]
pub fn check_latin_text(config: &LatinTextConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "latin",
            latin_text(),
            format!("{field} can only contain Latin letters"),
        ))
        .built("check_latin_text")
}

/// A caller-supplied regular expression, with a caller-supplied message.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile.
pub fn check_custom_pattern(config: &PatternConfig) -> Result<CheckChain, ConfigError> {
    let field = config.field.as_str();
    let pattern = Regex::new(&config.pattern).map_err(|source| ConfigError::InvalidPattern {
        field: field.to_string(),
        source,
    })?;
    Ok(CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "pattern",
            matches_regex(pattern),
            config.message.as_str(),
        ))
        .built("check_custom_pattern"))
}

/// Street address length within `[min, max]` (default 5 to 100).
#[must_use]
pub fn check_street_address(config: &StreetAddressConfig) -> CheckChain {
    let StreetAddressConfig { field, min, max } = config;
    CheckChain::new(field.as_str())
        .with(Check::from_validator(
            field.as_str(),
            "length",
            length_range(*min, *max),
            format!("{field} must be between {min} and {max} characters long"),
        ))
        .built("check_street_address")
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
    async fn test_length_defaults() {
        let chain = check_length(&LengthConfig::default());
        assert!(messages(&chain, json!("abcd")).await.is_empty());
        assert_eq!(
            messages(&chain, json!("abc")).await,
            ["text must be between 4 and 16 characters"]
        );
    }

    #[tokio::test]
    async fn test_city_name() {
        let chain = check_city_name(&CityNameConfig::default());
        assert!(messages(&chain, json!("Paris")).await.is_empty());
        assert_eq!(
            messages(&chain, json!("Paris 2")).await,
            ["city can only contain alphabetic characters"]
        );
    }

    #[tokio::test]
    async fn test_custom_pattern() {
        let config = PatternConfig::new(r"^[A-Z]{3}-\d{3}$").with_field("sku");
        let chain = check_custom_pattern(&config).unwrap();
        assert_eq!(chain.field(), "sku");
        assert!(messages(&chain, json!("ABC-123")).await.is_empty());
        assert_eq!(messages(&chain, json!("abc-123")).await, [DEFAULT_PATTERN_MESSAGE]);
    }

    #[test]
    fn test_custom_pattern_rejects_bad_regex() {
        let error = check_custom_pattern(&PatternConfig::new("([a-z")).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidPattern { ref field, .. } if field == "text"));
    }

    #[tokio::test]
    async fn test_street_address() {
        let chain = check_street_address(&StreetAddressConfig::default());
        assert_eq!(chain.field(), "address");
        assert!(messages(&chain, json!("1 Main St")).await.is_empty());
        assert_eq!(
            messages(&chain, json!("1 St")).await,
            ["address must be between 5 and 100 characters long"]
        );
    }

    #[test]
    fn test_pattern_config_requires_pattern() {
        let parsed: PatternConfig = serde_json::from_value(json!({"pattern": "^x$"})).unwrap();
        assert_eq!(parsed.field, "text");
        assert_eq!(parsed.message, DEFAULT_PATTERN_MESSAGE);
        assert!(serde_json::from_value::<PatternConfig>(json!({"field": "x"})).is_err());
    }
}
