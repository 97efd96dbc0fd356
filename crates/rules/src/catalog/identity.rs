//! Identity builders: names, emails and passwords
//!
//! These builders assemble multi-Check chains. Which Checks are included
//! depends on boolean flags in the configuration; order is fixed.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::chain::{Check, CheckChain, Sanitize};
use crate::foundation::Validate;
use crate::validators::{email, email_domain, length_range, max_length, not_empty_text};

// ============================================================================
// NAME
// ============================================================================

static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());
static LETTERS_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static LETTERS_SPECIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\-_']+$").unwrap());
static LETTERS_SPACES_SPECIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-_']+$").unwrap());

/// The character classes a name may contain.
///
/// Specials are hyphens, apostrophes and underscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameCharset {
    /// ASCII letters.
    Letters,
    /// ASCII letters and whitespace.
    LettersAndSpaces,
    /// ASCII letters and specials.
    LettersAndSpecials,
    /// ASCII letters, whitespace and specials.
    LettersSpacesAndSpecials,
}

impl NameCharset {
    /// Picks the charset for a pair of flags.
    #[must_use]
    pub const fn from_flags(allow_spaces: bool, allow_special_chars: bool) -> Self {
        match (allow_spaces, allow_special_chars) {
            (false, false) => Self::Letters,
            (true, false) => Self::LettersAndSpaces,
            (false, true) => Self::LettersAndSpecials,
            (true, true) => Self::LettersSpacesAndSpecials,
        }
    }

    /// Human-readable list of what the charset permits.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::LettersAndSpaces => "letters, spaces",
            Self::LettersAndSpecials => "letters, hyphens, apostrophes, and underscores",
            Self::LettersSpacesAndSpecials => {
                "letters, spaces, hyphens, apostrophes, and underscores"
            }
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Letters => &LETTERS,
            Self::LettersAndSpaces => &LETTERS_SPACES,
            Self::LettersAndSpecials => &LETTERS_SPECIALS,
            Self::LettersSpacesAndSpecials => &LETTERS_SPACES_SPECIALS,
        }
    }
}

impl Validate for NameCharset {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        self.pattern().is_match(input)
    }
}

/// Configuration for [`check_name`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NameConfig {
    /// Field the chain validates.
    pub field: String,
    /// Shortest accepted length after trimming.
    pub min: usize,
    /// Longest accepted length after trimming.
    pub max: usize,
    /// Whether whitespace may appear inside the name.
    pub allow_spaces: bool,
    /// Whether hyphens, apostrophes and underscores may appear.
    pub allow_special_chars: bool,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            field: "name".to_string(),
            min: 2,
            max: 50,
            allow_spaces: true,
            allow_special_chars: false,
        }
    }
}

impl NameConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the inclusive length bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets whether whitespace is allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_spaces(mut self, allow: bool) -> Self {
        self.allow_spaces = allow;
        self
    }

    /// Sets whether hyphens, apostrophes and underscores are allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_special_chars(mut self, allow: bool) -> Self {
        self.allow_special_chars = allow;
        self
    }
}

/// A person's name: one length Check and one charset Check, both on the
/// trimmed value.
#[must_use]
pub fn check_name(config: &NameConfig) -> CheckChain {
    let NameConfig { field, min, max, .. } = config;
    let charset = NameCharset::from_flags(config.allow_spaces, config.allow_special_chars);
    CheckChain::new(field.as_str())
        .with(
            Check::from_validator(
                field.as_str(),
                "length",
                length_range(*min, *max),
                format!("{field} must be between {min} and {max} characters long"),
            )
            .sanitized(Sanitize::Trim),
        )
        .with(
            Check::from_validator(
                field.as_str(),
                "charset",
                charset,
                format!("{field} can only contain {}", charset.description()),
            )
            .sanitized(Sanitize::Trim),
        )
        .built("check_name")
}

// ============================================================================
// EMAIL
// ============================================================================

/// Configuration for [`check_email`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Field the chain validates.
    pub field: String,
    /// Whether an empty value is an error. When false, empty values pass
    /// every Check.
    pub required: bool,
    /// Domains the address must belong to. Empty means any domain.
    pub allowed_domains: Vec<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            field: "email".to_string(),
            required: true,
            allowed_domains: Vec::new(),
        }
    }
}

impl EmailConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets whether the field is required.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Restricts addresses to the given domains.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_allowed_domains(
        mut self,
        domains: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_domains = domains.into_iter().map(Into::into).collect();
        self
    }
}

/// An email address on the trimmed value: format, then presence (if
/// required), then domain (if restricted).
#[must_use]
pub fn check_email(config: &EmailConfig) -> CheckChain {
    let field = config.field.as_str();
    let required = config.required;

    let mut chain = CheckChain::new(field).with(trimmed(
        field,
        "email",
        email(),
        format!("{field} must be a valid email address"),
        required,
    ));

    if required {
        chain.push(trimmed(
            field,
            "required",
            not_empty_text(),
            format!("{field} is required"),
            true,
        ));
    }

    if !config.allowed_domains.is_empty() {
        chain.push(trimmed(
            field,
            "domain",
            email_domain(config.allowed_domains.clone()),
            format!(
                "{field} must be from an allowed domain ({})",
                config.allowed_domains.join(", ")
            ),
            required,
        ));
    }

    chain.built("check_email")
}

/// A Check on the trimmed value. Unless `required`, blank values pass.
fn trimmed<V>(
    field: &str,
    name: &'static str,
    validator: V,
    message: String,
    required: bool,
) -> Check
where
    V: Validate<Input = str> + Send + Sync + 'static,
{
    let check = if required {
        Check::from_validator(field, name, validator, message)
    } else {
        Check::sync(
            field,
            name,
            move |value| is_blank(value) || validator.is_valid_value(value),
            message,
        )
    };
    check.sanitized(Sanitize::Trim)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Configuration for [`check_localized_email`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalizedEmailConfig {
    /// Field the chain validates.
    pub field: String,
    /// Longest accepted address after normalization.
    pub max_length: usize,
}

impl Default for LocalizedEmailConfig {
    fn default() -> Self {
        Self {
            field: "email".to_string(),
            max_length: 255,
        }
    }
}

impl LocalizedEmailConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }
}

/// An email address, then its normalized (trimmed, lowercased) length.
#[must_use]
pub fn check_localized_email(config: &LocalizedEmailConfig) -> CheckChain {
    let LocalizedEmailConfig { field, max_length: max } = config;
    CheckChain::new(field.as_str())
        .with(Check::from_validator(
            field.as_str(),
            "email",
            email(),
            format!("{field} must be a valid email"),
        ))
        .with(
            Check::from_validator(
                field.as_str(),
                "length",
                max_length(*max),
                format!("{field} cannot exceed {max} characters"),
            )
            .sanitized(Sanitize::TrimLowercase),
        )
        .built("check_localized_email")
}

// ============================================================================
// PASSWORD
// ============================================================================

/// Characters counted as special by [`PasswordRequirement::Special`].
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// One optional character-class requirement of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRequirement {
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one ASCII lowercase letter.
    Lowercase,
    /// At least one ASCII digit.
    Number,
    /// At least one of [`SPECIAL_CHARACTERS`].
    Special,
}

impl PasswordRequirement {
    /// Every requirement, in the order their Checks appear in a chain.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Number, Self::Special];

    /// Check name used in chains.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Number => "number",
            Self::Special => "special",
        }
    }

    /// What the password must contain, for messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase letter",
            Self::Lowercase => "lowercase letter",
            Self::Number => "number",
            Self::Special => "special character",
        }
    }
}

impl Validate for PasswordRequirement {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        match self {
            Self::Uppercase => input.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => input.chars().any(|c| c.is_ascii_lowercase()),
            Self::Number => input.chars().any(|c| c.is_ascii_digit()),
            Self::Special => input.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }
}

/// Configuration for [`check_password`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Field the chain validates.
    pub field: String,
    /// Shortest accepted length after trimming.
    pub min_length: usize,
    /// Longest accepted length after trimming.
    pub max_length: usize,
    /// Require an uppercase letter.
    pub require_uppercase: bool,
    /// Require a lowercase letter.
    pub require_lowercase: bool,
    /// Require a digit.
    pub require_number: bool,
    /// Require a special character.
    pub require_special_char: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            field: "password".to_string(),
            min_length: 8,
            max_length: 23,
            require_uppercase: true,
            require_lowercase: true,
            require_number: true,
            require_special_char: true,
        }
    }
}

impl PasswordConfig {
    /// Configuration for `field`, other settings at their defaults.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the inclusive length bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Turns one requirement on or off.
    #[must_use = "builder methods must be chained or built"]
    pub fn require(mut self, requirement: PasswordRequirement, on: bool) -> Self {
        *self.flag_mut(requirement) = on;
        self
    }

    /// Returns whether `requirement` is active.
    #[must_use]
    pub const fn requires(&self, requirement: PasswordRequirement) -> bool {
        match requirement {
            PasswordRequirement::Uppercase => self.require_uppercase,
            PasswordRequirement::Lowercase => self.require_lowercase,
            PasswordRequirement::Number => self.require_number,
            PasswordRequirement::Special => self.require_special_char,
        }
    }

    fn flag_mut(&mut self, requirement: PasswordRequirement) -> &mut bool {
        match requirement {
            PasswordRequirement::Uppercase => &mut self.require_uppercase,
            PasswordRequirement::Lowercase => &mut self.require_lowercase,
            PasswordRequirement::Number => &mut self.require_number,
            PasswordRequirement::Special => &mut self.require_special_char,
        }
    }
}

/// A password on the trimmed value: one length Check, then one Check per
/// active requirement, each with its own message.
#[must_use]
pub fn check_password(config: &PasswordConfig) -> CheckChain {
    let field = config.field.as_str();
    let (min, max) = (config.min_length, config.max_length);

    let length = Check::from_validator(
        field,
        "length",
        length_range(min, max),
        format!("{field} must be between {min} and {max} characters long"),
    )
    .sanitized(Sanitize::Trim);

    let requirements = PasswordRequirement::ALL
        .into_iter()
        .filter(|requirement| config.requires(*requirement))
        .map(|requirement| {
            Check::from_validator(
                field,
                requirement.name(),
                requirement,
                format!(
                    "{field} must contain at least one {}",
                    requirement.description()
                ),
            )
            .sanitized(Sanitize::Trim)
        });

    let mut chain = CheckChain::new(field).with(length);
    chain.extend(requirements);
    chain.built("check_password")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ShortCircuit;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn failed(chain: &CheckChain, value: Value) -> Vec<&'static str> {
        let outcome = chain.evaluate(&value, ShortCircuit::Continue).await;
        chain
            .iter()
            .filter(|check| {
                outcome
                    .errors
                    .iter()
                    .any(|error| error.message() == check.message().resolve(&value))
            })
            .map(Check::name)
            .collect()
    }

    #[rstest::rstest]
    #[case(false, false, NameCharset::Letters)]
    #[case(true, false, NameCharset::LettersAndSpaces)]
    #[case(false, true, NameCharset::LettersAndSpecials)]
    #[case(true, true, NameCharset::LettersSpacesAndSpecials)]
    fn test_name_charset_flags(
        #[case] spaces: bool,
        #[case] specials: bool,
        #[case] expected: NameCharset,
    ) {
        assert_eq!(NameCharset::from_flags(spaces, specials), expected);
    }

    #[test]
    fn test_name_charset_patterns() {
        assert!(NameCharset::Letters.is_valid("Jane"));
        assert!(!NameCharset::Letters.is_valid("Jane Doe"));
        assert!(NameCharset::LettersAndSpecials.is_valid("O'Brien-Smith"));
        assert!(!NameCharset::LettersAndSpaces.is_valid("O'Brien"));
        assert!(NameCharset::LettersSpacesAndSpecials.is_valid("Mary-Jane O'Neil"));
    }

    #[tokio::test]
    async fn test_name_defaults() {
        let chain = check_name(&NameConfig::default());
        assert_eq!(chain.names(), ["length", "charset"]);
        assert!(failed(&chain, json!("Jane Doe")).await.is_empty());
        assert!(failed(&chain, json!("  Jane  ")).await.is_empty());
        assert_eq!(failed(&chain, json!("Jane_Doe")).await, ["charset"]);
        assert_eq!(failed(&chain, json!("J")).await, ["length"]);
    }

    #[tokio::test]
    async fn test_name_messages() {
        let chain = check_name(&NameConfig::default().allow_special_chars(true));
        let outcome = chain.evaluate(&json!("J1"), ShortCircuit::Continue).await;
        assert_eq!(
            outcome.messages(),
            [
                "name can only contain letters, spaces, hyphens, apostrophes, and underscores"
            ]
        );
    }

    #[tokio::test]
    async fn test_email_required_with_domains() {
        let config = EmailConfig::default().with_allowed_domains(["example.com"]);
        let chain = check_email(&config);
        assert_eq!(chain.names(), ["email", "required", "domain"]);

        assert!(failed(&chain, json!(" jane@example.com ")).await.is_empty());
        assert_eq!(failed(&chain, json!("jane@other.com")).await, ["domain"]);
        assert_eq!(
            failed(&chain, json!("")).await,
            ["email", "required", "domain"]
        );

        let outcome = chain
            .evaluate(&json!("jane@other.com"), ShortCircuit::Continue)
            .await;
        assert_eq!(
            outcome.messages(),
            ["email must be from an allowed domain (example.com)"]
        );
    }

    #[tokio::test]
    async fn test_optional_email_accepts_blank() {
        let chain = check_email(&EmailConfig::for_field("backup_email").required(false));
        assert_eq!(chain.names(), ["email"]);
        assert!(failed(&chain, json!("")).await.is_empty());
        assert!(failed(&chain, json!(null)).await.is_empty());
        assert!(failed(&chain, json!("  ")).await.is_empty());
        assert_eq!(failed(&chain, json!("nope")).await, ["email"]);
    }

    #[tokio::test]
    async fn test_localized_email_normalizes_before_length() {
        let chain = check_localized_email(&LocalizedEmailConfig::default());
        let address = |extra: usize| {
            format!(
                "{}@{}.{}.{}.com",
                "A".repeat(64),
                "b".repeat(62 + extra),
                "c".repeat(61),
                "d".repeat(61)
            )
        };
        assert_eq!(address(0).len(), 255);
        assert!(failed(&chain, json!(address(0))).await.is_empty());
        let padded = json!(format!("  {}  ", address(0)));
        assert_eq!(failed(&chain, padded).await, ["email"]);

        let outcome = chain
            .evaluate(&json!(address(1)), ShortCircuit::Continue)
            .await;
        assert_eq!(outcome.messages(), ["email cannot exceed 255 characters"]);
    }

    #[tokio::test]
    async fn test_password_all_requirements() {
        let chain = check_password(&PasswordConfig::default());
        assert_eq!(
            chain.names(),
            ["length", "uppercase", "lowercase", "number", "special"]
        );
        assert!(failed(&chain, json!("Abcdef1!")).await.is_empty());
        assert_eq!(
            failed(&chain, json!("abcdefgh")).await,
            ["uppercase", "number", "special"]
        );
    }

    #[rstest::rstest]
    #[case("abcdef1!", "uppercase")]
    #[case("ABCDEF1!", "lowercase")]
    #[case("Abcdefg!", "number")]
    #[case("Abcdefg1", "special")]
    #[case("Ab1!", "length")]
    #[tokio::test]
    async fn test_password_missing_one_class(#[case] password: &str, #[case] expected: &str) {
        let chain = check_password(&PasswordConfig::default());
        assert_eq!(failed(&chain, json!(password)).await, [expected]);
    }

    #[tokio::test]
    async fn test_password_requirements_filtered() {
        let config = PasswordConfig::default()
            .require(PasswordRequirement::Special, false)
            .require(PasswordRequirement::Uppercase, false);
        let chain = check_password(&config);
        assert_eq!(chain.names(), ["length", "lowercase", "number"]);
        assert!(failed(&chain, json!("abcdefg1")).await.is_empty());
    }

    #[tokio::test]
    async fn test_password_message_wording() {
        let chain = check_password(&PasswordConfig::for_field("secret"));
        let outcome = chain.evaluate(&json!("ABCDEFGH"), ShortCircuit::Continue).await;
        assert_eq!(
            outcome.messages(),
            [
                "secret must contain at least one lowercase letter",
                "secret must contain at least one number",
                "secret must contain at least one special character",
            ]
        );
    }

    #[test]
    fn test_password_config_from_json() {
        let config: PasswordConfig =
            serde_json::from_value(json!({"min_length": 12, "require_special_char": false}))
                .unwrap();
        assert_eq!(config.field, "password");
        assert_eq!(config.min_length, 12);
        assert_eq!(config.max_length, 23);
        assert!(!config.requires(PasswordRequirement::Special));
        assert!(config.requires(PasswordRequirement::Number));
    }
}
