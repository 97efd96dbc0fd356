//! Format builders: URL, phone, date, card, JSON and boolean

use serde::Deserialize;

use crate::chain::{Check, CheckChain};
use crate::validators::{
    ANY_LOCALE, DEFAULT_DATE_FORMAT, DateFormat, Phone, boolean_literal, credit_card,
    json_document, url,
};

/// Format used by [`check_localized_date`] when none is configured.
pub const DEFAULT_LOCALIZED_DATE_FORMAT: &str = "YYYY-MM-DD";

field_config! {
    /// Configuration for [`check_url`].
    UrlConfig => "url"
}

field_config! {
    /// Configuration for [`check_credit_card`].
    CreditCardConfig => "card"
}

field_config! {
    /// Configuration for [`check_json`].
    JsonConfig => "data"
}

field_config! {
    /// Configuration for [`check_boolean`].
    BooleanConfig => "flag"
}

/// Configuration for [`check_phone_number`] and [`check_phone_number_by_locale`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    /// Field the chain validates.
    pub field: String,
    /// Phone locale (`en-US`, `de-DE`, ...) or `any`.
    pub locale: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            field: "phone".to_string(),
            locale: ANY_LOCALE.to_string(),
        }
    }
}

impl PhoneConfig {
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

/// Configuration for [`check_date`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Field the chain validates.
    pub field: String,
    /// Date format, such as `YYYY-MM-DD` or `DD.MM.YYYY`.
    pub format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            field: "date".to_string(),
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DateConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the format.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Configuration for [`check_localized_date`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalizedDateConfig {
    /// Field the chain validates.
    pub field: String,
    /// Date format.
    pub format: String,
    /// Require the format's own delimiter instead of any of `/ - .`.
    pub strict: bool,
}

impl Default for LocalizedDateConfig {
    fn default() -> Self {
        Self {
            field: "date".to_string(),
            format: DEFAULT_LOCALIZED_DATE_FORMAT.to_string(),
            strict: false,
        }
    }
}

impl LocalizedDateConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the format.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Requires the format's own delimiter.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// URL format. `http`, `https` and `ftp` only; a missing scheme reads as
/// `http`.
#[must_use]
pub fn check_url(config: &UrlConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "url",
            url(),
            format!("{field} must be a valid URL"),
        ))
        .built("check_url")
}

/// Mobile phone number in the configured locale (default: any locale).
#[must_use]
pub fn check_phone_number(config: &PhoneConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "phone",
            Phone::for_locale(&config.locale),
            format!("{field} must be a valid phone number"),
        ))
        .built("check_phone_number")
}

/// Mobile phone number in the configured locale, with the locale named in
/// the message.
#[must_use]
pub fn check_phone_number_by_locale(config: &PhoneConfig) -> CheckChain {
    let field = config.field.as_str();
    let locale = config.locale.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "phone",
            Phone::for_locale(locale),
            format!("{field} must be a valid phone number for locale {locale}"),
        ))
        .built("check_phone_number_by_locale")
}

/// Calendar date in the configured format. Any of `/`, `-` or `.` may
/// separate the parts.
#[must_use]
pub fn check_date(config: &DateConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "date",
            DateFormat::lenient(&config.format),
            format!("{field} must be a valid date"),
        ))
        .built("check_date")
}

/// Calendar date in the configured format. Any of `/ - .` may separate the
/// parts unless the configuration is strict.
#[must_use]
pub fn check_localized_date(config: &LocalizedDateConfig) -> CheckChain {
    let field = config.field.as_str();
    let format = config.format.as_str();
    let validator = if config.strict {
        DateFormat::strict(format)
    } else {
        DateFormat::lenient(format)
    };
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "date",
            validator,
            format!("{field} must be in the format {format}"),
        ))
        .built("check_localized_date")
}

/// Payment card number: 13 to 19 digits passing the Luhn check.
#[must_use]
pub fn check_credit_card(config: &CreditCardConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "credit_card",
            credit_card(),
            format!("{field} must be a valid credit card number"),
        ))
        .built("check_credit_card")
}

/// A string holding a JSON object or array.
#[must_use]
pub fn check_json(config: &JsonConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "json",
            json_document(),
            format!("{field} must be a valid JSON string"),
        ))
        .built("check_json")
}

/// A boolean, or one of the strings `true`, `false`, `1`, `0`.
#[must_use]
pub fn check_boolean(config: &BooleanConfig) -> CheckChain {
    let field = config.field.as_str();
    CheckChain::new(field)
        .with(Check::from_validator(
            field,
            "boolean",
            boolean_literal(),
            format!("{field} must be a boolean value"),
        ))
        .built("check_boolean")
}
