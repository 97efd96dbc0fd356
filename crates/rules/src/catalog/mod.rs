//! Builder Catalog
//!
//! One builder per capability. Each takes its configuration struct (every
//! struct implements `Default` with the documented defaults) and returns a
//! ready [`CheckChain`](crate::chain::CheckChain). Builders are stateless:
//! calling one twice with the same configuration yields chains that behave
//! identically.
//!
//! | Area | Builders |
//! |------|----------|
//! | Format | [`check_url`], [`check_phone_number`], [`check_phone_number_by_locale`], [`check_date`], [`check_localized_date`], [`check_credit_card`], [`check_json`], [`check_boolean`] |
//! | Text | [`check_length`], [`check_alphanumeric`], [`check_alpha`], [`check_city_name`], [`check_latin_text`], [`check_custom_pattern`], [`check_street_address`] |
//! | Bounded | [`check_number`], [`check_currency`], [`check_array`], [`check_postal_code`] |
//! | Membership | [`check_enum`], [`check_gender`], [`check_timezone`] |
//! | Identity | [`check_name`], [`check_email`], [`check_localized_email`], [`check_password`] |
//! | Uniqueness | [`check_unique_email`], [`check_unique`], [`check_unique_by_locale`], [`check_custom_unique`] |
//!
//! # Examples
//!
//! ```
//! use formcheck_rules::catalog::{NameConfig, PasswordConfig, check_name, check_password};
//!
//! let name = check_name(&NameConfig::default());
//! assert_eq!(name.names(), ["length", "charset"]);
//!
//! let password = check_password(&PasswordConfig::for_field("secret").with_bounds(12, 64));
//! assert_eq!(password.field(), "secret");
//! assert_eq!(password.len(), 5);
//! ```

/// Declares a configuration struct whose only setting is the field name.
macro_rules! field_config {
    ($(#[$meta:meta])* $name:ident => $default:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Field the chain validates.
            pub field: String,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    field: $default.to_string(),
                }
            }
        }

        impl $name {
            /// Configuration for `field`.
            pub fn for_field(field: impl Into<String>) -> Self {
                Self {
                    field: field.into(),
                }
            }
        }
    };
}

mod bounded;
mod choice;
mod config;
mod format;
mod identity;
mod text;
mod uniqueness;

pub use bounded::{
    ArrayConfig, CurrencyConfig, NumberConfig, PostalCodeConfig, check_array, check_currency,
    check_number, check_postal_code,
};
pub use choice::{
    DEFAULT_ENUM_VALUES, DEFAULT_GENDERS, DEFAULT_TIMEZONES, EnumConfig, GenderConfig,
    TimezoneConfig, check_enum, check_gender, check_timezone,
};
pub use config::RuleConfig;
pub use format::{
    BooleanConfig, CreditCardConfig, DEFAULT_LOCALIZED_DATE_FORMAT, DateConfig, JsonConfig,
    LocalizedDateConfig, PhoneConfig, UrlConfig, check_boolean, check_credit_card, check_date,
    check_json, check_localized_date, check_phone_number, check_phone_number_by_locale,
    check_url,
};
pub use identity::{
    EmailConfig, LocalizedEmailConfig, NameCharset, NameConfig, PasswordConfig,
    PasswordRequirement, SPECIAL_CHARACTERS, check_email, check_localized_email, check_name,
    check_password,
};
pub use text::{
    AlphaConfig, AlphanumericConfig, CityNameConfig, DEFAULT_PATTERN_MESSAGE, LatinTextConfig,
    LengthConfig, PatternConfig, StreetAddressConfig, check_alpha, check_alphanumeric,
    check_city_name, check_custom_pattern, check_latin_text, check_length, check_street_address,
};
pub use uniqueness::{
    CustomUniqueConfig, DEFAULT_LOCALE_KEY, DEFAULT_UNIQUE_LOCALE, UniqueByLocaleConfig,
    UniqueConfig, UniqueEmailConfig, check_custom_unique, check_unique, check_unique_by_locale,
    check_unique_email,
};
