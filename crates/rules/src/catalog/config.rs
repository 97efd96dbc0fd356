//! Rule sets loaded from configuration
//!
//! A host can describe its rules as JSON instead of calling builders
//! directly:
//!
//! ```json
//! [
//!   {"rule": "email", "allowed_domains": ["example.com"]},
//!   {"rule": "password", "min_length": 12},
//!   {"rule": "unique_email"}
//! ]
//! ```
//!
//! Omitted settings take the builder's defaults. Store handles cannot be
//! written in JSON; [`RuleConfig::build`] injects the one it is given into
//! every uniqueness rule.

use serde::Deserialize;

use super::bounded::{
    ArrayConfig, CurrencyConfig, NumberConfig, PostalCodeConfig, check_array, check_currency,
    check_number, check_postal_code,
};
use super::choice::{
    EnumConfig, GenderConfig, TimezoneConfig, check_enum, check_gender, check_timezone,
};
use super::format::{
    BooleanConfig, CreditCardConfig, DateConfig, JsonConfig, LocalizedDateConfig, PhoneConfig,
    UrlConfig, check_boolean, check_credit_card, check_date, check_json, check_localized_date,
    check_phone_number, check_phone_number_by_locale, check_url,
};
use super::identity::{
    EmailConfig, LocalizedEmailConfig, NameConfig, PasswordConfig, check_email,
    check_localized_email, check_name, check_password,
};
use super::text::{
    AlphaConfig, AlphanumericConfig, CityNameConfig, LatinTextConfig, LengthConfig, PatternConfig,
    StreetAddressConfig, check_alpha, check_alphanumeric, check_city_name, check_custom_pattern,
    check_latin_text, check_length, check_street_address,
};
use super::uniqueness::{
    CustomUniqueConfig, UniqueByLocaleConfig, UniqueConfig, UniqueEmailConfig,
    check_custom_unique, check_unique, check_unique_by_locale, check_unique_email,
};
use crate::chain::CheckChain;
use crate::foundation::ConfigError;
use crate::store::StoreHandle;

/// One builder invocation, named by its `rule` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    Url(UrlConfig),
    PhoneNumber(PhoneConfig),
    PhoneNumberByLocale(PhoneConfig),
    Date(DateConfig),
    LocalizedDate(LocalizedDateConfig),
    Number(NumberConfig),
    Length(LengthConfig),
    Alphanumeric(AlphanumericConfig),
    Alpha(AlphaConfig),
    CityName(CityNameConfig),
    LatinText(LatinTextConfig),
    CustomPattern(PatternConfig),
    CreditCard(CreditCardConfig),
    Json(JsonConfig),
    Boolean(BooleanConfig),
    Array(ArrayConfig),
    Currency(CurrencyConfig),
    StreetAddress(StreetAddressConfig),
    PostalCode(PostalCodeConfig),
    Gender(GenderConfig),
    Timezone(TimezoneConfig),
    Enum(EnumConfig),
    Name(NameConfig),
    Email(EmailConfig),
    LocalizedEmail(LocalizedEmailConfig),
    Password(PasswordConfig),
    UniqueEmail(UniqueEmailConfig),
    Unique(UniqueConfig),
    UniqueByLocale(UniqueByLocaleConfig),
    CustomUnique(CustomUniqueConfig),
}

impl RuleConfig {
    /// Parses a JSON array of rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown rule tags
    /// and settings of the wrong type.
    pub fn from_json_list(json: &str) -> Result<Vec<Self>, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds every rule in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rule that fails to build.
    pub fn build_all(
        rules: &[Self],
        store: Option<&StoreHandle>,
    ) -> Result<Vec<CheckChain>, ConfigError> {
        rules.iter().map(|rule| rule.build(store)).collect()
    }

    /// Whether the rule needs a store.
    #[must_use]
    pub const fn needs_store(&self) -> bool {
        matches!(
            self,
            Self::UniqueEmail(_) | Self::Unique(_) | Self::UniqueByLocale(_) | Self::CustomUnique(_)
        )
    }

    /// Builds the rule's chain. `store` is used by uniqueness rules that do
    /// not already carry one.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingStore`] for a uniqueness rule without a store
    /// - [`ConfigError::InvalidPattern`] for a custom pattern that does not
    ///   compile
    /// - [`ConfigError::InvalidRange`] for bounds with `min > max`
    pub fn build(&self, store: Option<&StoreHandle>) -> Result<CheckChain, ConfigError> {
        let chain = match self {
            Self::Url(config) => check_url(config),
            Self::PhoneNumber(config) => check_phone_number(config),
            Self::PhoneNumberByLocale(config) => check_phone_number_by_locale(config),
            Self::Date(config) => check_date(config),
            Self::LocalizedDate(config) => check_localized_date(config),
            Self::Number(config) => {
                ordered(&config.field, config.min, config.max)?;
                check_number(config)
            }
            Self::Length(config) => {
                ordered_len(&config.field, config.min, config.max)?;
                check_length(config)
            }
            Self::Alphanumeric(config) => check_alphanumeric(config),
            Self::Alpha(config) => check_alpha(config),
            Self::CityName(config) => check_city_name(config),
            Self::LatinText(config) => check_latin_text(config),
            Self::CustomPattern(config) => check_custom_pattern(config)?,
            Self::CreditCard(config) => check_credit_card(config),
            Self::Json(config) => check_json(config),
            Self::Boolean(config) => check_boolean(config),
            Self::Array(config) => check_array(config),
            Self::Currency(config) => check_currency(config),
            Self::StreetAddress(config) => {
                ordered_len(&config.field, config.min, config.max)?;
                check_street_address(config)
            }
            Self::PostalCode(config) => check_postal_code(config),
            Self::Gender(config) => check_gender(config),
            Self::Timezone(config) => check_timezone(config),
            Self::Enum(config) => check_enum(config),
            Self::Name(config) => {
                ordered_len(&config.field, config.min, config.max)?;
                check_name(config)
            }
            Self::Email(config) => check_email(config),
            Self::LocalizedEmail(config) => check_localized_email(config),
            Self::Password(config) => {
                ordered_len(&config.field, config.min_length, config.max_length)?;
                check_password(config)
            }
            Self::UniqueEmail(config) => {
                let mut config = config.clone();
                config.store = config.store.or_else(|| store.cloned());
                check_unique_email(&config)?
            }
            Self::Unique(config) => {
                let mut config = config.clone();
                config.store = config.store.or_else(|| store.cloned());
                check_unique(&config)?
            }
            Self::UniqueByLocale(config) => {
                let mut config = config.clone();
                config.store = config.store.or_else(|| store.cloned());
                check_unique_by_locale(&config)?
            }
            Self::CustomUnique(config) => {
                let mut config = config.clone();
                config.store = config.store.or_else(|| store.cloned());
                check_custom_unique(&config)?
            }
        };
        Ok(chain)
    }
}

fn ordered(field: &str, min: i64, max: i64) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidRange {
            field: field.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

fn ordered_len(field: &str, min: usize, max: usize) -> Result<(), ConfigError> {
    let clamp = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
    ordered(field, clamp(min), clamp(max))
}
