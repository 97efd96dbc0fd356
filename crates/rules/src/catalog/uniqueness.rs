//! Uniqueness builders
//!
//! Every builder here needs a [`StoreHandle`]. Calling one without a store
//! is a programming error and fails at build time with
//! [`ConfigError::MissingStore`], before any record is validated.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::chain::{Check, CheckChain};
use crate::foundation::ConfigError;
use crate::store::StoreHandle;
use crate::unique::Unique;

/// Locale used by [`check_unique_by_locale`] when none is configured.
pub const DEFAULT_UNIQUE_LOCALE: &str = "en-US";

/// Record attribute holding the locale in [`check_unique_by_locale`] lookups.
pub const DEFAULT_LOCALE_KEY: &str = "locale";

fn require_store<'a>(
    store: Option<&'a StoreHandle>,
    rule: &'static str,
    field: &str,
) -> Result<&'a StoreHandle, ConfigError> {
    store.ok_or_else(|| ConfigError::MissingStore {
        rule,
        field: field.to_string(),
    })
}

fn unique_chain(field: &str, predicate: Unique, message: String) -> CheckChain {
    CheckChain::new(field).with(Check::suspending(
        field,
        "unique",
        Arc::new(predicate),
        message,
    ))
}

// ============================================================================
// UNIQUE EMAIL
// ============================================================================

/// Configuration for [`check_unique_email`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UniqueEmailConfig {
    /// Field the chain validates.
    pub field: String,
    /// Store to look addresses up in.
    #[serde(skip)]
    pub store: Option<StoreHandle>,
}

impl Default for UniqueEmailConfig {
    fn default() -> Self {
        Self {
            field: "email".to_string(),
            store: None,
        }
    }
}

impl UniqueEmailConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the store.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_store(mut self, store: StoreHandle) -> Self {
        self.store = Some(store);
        self
    }
}

/// No stored record has this address under `email`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingStore`] if no store is configured.
pub fn check_unique_email(config: &UniqueEmailConfig) -> Result<CheckChain, ConfigError> {
    let field = config.field.as_str();
    let store = require_store(config.store.as_ref(), "check_unique_email", field)?;
    Ok(unique_chain(
        field,
        Unique::new(store.clone(), "email"),
        format!("{field} is already taken"),
    )
    .built("check_unique_email"))
}

// ============================================================================
// UNIQUE BY KEY
// ============================================================================

/// Configuration for [`check_unique`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UniqueConfig {
    /// Field the chain validates.
    pub field: String,
    /// Record attribute the value is looked up under.
    pub key: String,
    /// Failure message. Defaults to `<field> is already taken`.
    pub message: Option<String>,
    /// Store to look values up in.
    #[serde(skip)]
    pub store: Option<StoreHandle>,
}

impl Default for UniqueConfig {
    fn default() -> Self {
        Self {
            field: "username".to_string(),
            key: "username".to_string(),
            message: None,
            store: None,
        }
    }
}

impl UniqueConfig {
    /// Configuration for `field`, looked up under an attribute of the same
    /// name.
    pub fn for_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            key: field.clone(),
            field,
            ..Self::default()
        }
    }

    /// Sets the record attribute to look the value up under.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the store.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_store(mut self, store: StoreHandle) -> Self {
        self.store = Some(store);
        self
    }
}

/// No stored record has this value under the configured key.
///
/// # Errors
///
/// Returns [`ConfigError::MissingStore`] if no store is configured.
pub fn check_unique(config: &UniqueConfig) -> Result<CheckChain, ConfigError> {
    let field = config.field.as_str();
    let store = require_store(config.store.as_ref(), "check_unique", field)?;
    let message = config
        .message
        .clone()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("{field} is already taken"));
    Ok(
        unique_chain(field, Unique::new(store.clone(), config.key.as_str()), message)
            .built("check_unique"),
    )
}

// ============================================================================
// UNIQUE PER LOCALE
// ============================================================================

/// Configuration for [`check_unique_by_locale`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UniqueByLocaleConfig {
    /// Field the chain validates; also the attribute looked up.
    pub field: String,
    /// Locale the value must be unique in.
    pub locale: String,
    /// Record attribute holding the locale.
    pub locale_key: String,
    /// Store to look values up in.
    #[serde(skip)]
    pub store: Option<StoreHandle>,
}

impl Default for UniqueByLocaleConfig {
    fn default() -> Self {
        Self {
            field: "username".to_string(),
            locale: DEFAULT_UNIQUE_LOCALE.to_string(),
            locale_key: DEFAULT_LOCALE_KEY.to_string(),
            store: None,
        }
    }
}

impl UniqueByLocaleConfig {
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

    /// Sets the store.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_store(mut self, store: StoreHandle) -> Self {
        self.store = Some(store);
        self
    }
}

/// No stored record in the configured locale has this value under the
/// field's own name. The same value may exist in other locales.
///
/// # Errors
///
/// Returns [`ConfigError::MissingStore`] if no store is configured.
pub fn check_unique_by_locale(config: &UniqueByLocaleConfig) -> Result<CheckChain, ConfigError> {
    let UniqueByLocaleConfig {
        field,
        locale,
        locale_key,
        ..
    } = config;
    let store = require_store(config.store.as_ref(), "check_unique_by_locale", field)?;
    let predicate = Unique::new(store.clone(), field.as_str())
        .within(locale_key.as_str(), Value::String(locale.clone()));
    Ok(unique_chain(
        field,
        predicate,
        format!("{field} is already taken in the {locale} region"),
    )
    .built("check_unique_by_locale"))
}

// ============================================================================
// UNIQUE ON ANY ATTRIBUTE
// ============================================================================

/// Configuration for [`check_custom_unique`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CustomUniqueConfig {
    /// Field the chain validates.
    pub field: String,
    /// Record attribute to look the value up under. Defaults to the field
    /// name.
    pub target: Option<String>,
    /// Store to look values up in.
    #[serde(skip)]
    pub store: Option<StoreHandle>,
}

impl Default for CustomUniqueConfig {
    fn default() -> Self {
        Self {
            field: "value".to_string(),
            target: None,
            store: None,
        }
    }
}

impl CustomUniqueConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the record attribute to look the value up under.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the store.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_store(mut self, store: StoreHandle) -> Self {
        self.store = Some(store);
        self
    }

    /// The attribute the value is looked up under.
    #[must_use]
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.field)
    }
}

/// No stored record has this value under the target attribute, which may
/// differ from the field name (`sku` validated against `product_code`).
///
/// # Errors
///
/// Returns [`ConfigError::MissingStore`] if no store is configured.
pub fn check_custom_unique(config: &CustomUniqueConfig) -> Result<CheckChain, ConfigError> {
    let field = config.field.as_str();
    let store = require_store(config.store.as_ref(), "check_custom_unique", field)?;
    Ok(unique_chain(
        field,
        Unique::new(store.clone(), config.target()),
        format!("{field} is already taken"),
    )
    .built("check_custom_unique"))
}
