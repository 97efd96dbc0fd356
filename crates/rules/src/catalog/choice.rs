//! Membership builders: enums, gender and timezones

use serde::Deserialize;

use crate::chain::{Check, CheckChain, Message, display_value};
use crate::validators::one_of;

/// Gender options accepted by [`check_gender`] by default.
pub const DEFAULT_GENDERS: [&str; 4] = ["male", "female", "non-binary", "other"];

/// Timezones accepted by [`check_timezone`] by default.
pub const DEFAULT_TIMEZONES: [&str; 5] = [
    "Africa/Abidjan",
    "Africa/Cairo",
    "Asia/Kolkata",
    "America/New_York",
    "Europe/London",
];

/// Values accepted by [`check_enum`] by default.
pub const DEFAULT_ENUM_VALUES: [&str; 2] = ["user", "admin"];

macro_rules! choice_config {
    ($(#[$meta:meta])* $name:ident => $field:literal, $allowed:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Field the chain validates.
            pub field: String,
            /// Accepted values, compared exactly.
            pub allowed: Vec<String>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    field: $field.to_string(),
                    allowed: $allowed.iter().map(ToString::to_string).collect(),
                }
            }
        }

        impl $name {
            /// Configuration for `field`, other settings at their defaults.
            pub fn for_field(field: impl Into<String>) -> Self {
                Self {
                    field: field.into(),
                    ..Self::default()
                }
            }

            /// Replaces the accepted values.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_allowed(
                mut self,
                allowed: impl IntoIterator<Item = impl Into<String>>,
            ) -> Self {
                self.allowed = allowed.into_iter().map(Into::into).collect();
                self
            }
        }
    };
}

choice_config! {
    /// Configuration for [`check_enum`].
    EnumConfig => "role", DEFAULT_ENUM_VALUES
}

choice_config! {
    /// Configuration for [`check_gender`].
    GenderConfig => "gender", DEFAULT_GENDERS
}

choice_config! {
    /// Configuration for [`check_timezone`].
    TimezoneConfig => "timezone", DEFAULT_TIMEZONES
}

/// One of the configured values. The message names the rejected value and
/// lists the allowed ones.
#[must_use]
pub fn check_enum(config: &EnumConfig) -> CheckChain {
    let field = config.field.clone();
    let allowed = config.allowed.join(", ");
    let message = Message::dynamic(move |value| {
        format!(
            "Invalid value {} for {field}. Allowed values are: {allowed}",
            display_value(value)
        )
    });
    membership_chain(&config.field, &config.allowed, message).built("check_enum")
}

/// One of the configured gender options.
#[must_use]
pub fn check_gender(config: &GenderConfig) -> CheckChain {
    let message = format!(
        "{} must be one of the valid gender options: {}",
        config.field,
        config.allowed.join(", ")
    );
    membership_chain(&config.field, &config.allowed, message.into()).built("check_gender")
}

/// One of the configured IANA timezones. The message names the rejected
/// value and lists the allowed ones.
#[must_use]
pub fn check_timezone(config: &TimezoneConfig) -> CheckChain {
    let field = config.field.clone();
    let allowed = config.allowed.join(", ");
    let message = Message::dynamic(move |value| {
        format!(
            "{} is not a valid timezone for {field}. Allowed timezones are: {allowed}",
            display_value(value)
        )
    });
    membership_chain(&config.field, &config.allowed, message).built("check_timezone")
}

fn membership_chain(field: &str, allowed: &[String], message: Message) -> CheckChain {
    CheckChain::new(field).with(Check::from_validator(
        field,
        "one_of",
        one_of(allowed.iter().cloned()),
        message,
    ))
}
