//! Error types for rule construction and evaluation
//!
//! Three failure kinds flow out of this crate and they never mix:
//!
//! - [`ValidationError`]: a Check rejected the value. Expected, reported
//!   through the per-field message channel.
//! - [`StoreFault`]: the backing store failed while a uniqueness Check was
//!   waiting on it. Infrastructure trouble, not a user input problem.
//! - [`ConfigError`]: a builder was called with configuration it cannot
//!   work with. Raised while the chain is being built, never later.

use std::sync::Arc;

use indexmap::IndexMap;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed Check: the field it belongs to and its resolved message.
///
/// # Examples
///
/// ```
/// use formcheck_rules::foundation::ValidationError;
///
/// let error = ValidationError::new("email", "email must be a valid email address");
/// assert_eq!(error.field(), "email");
/// assert_eq!(error.to_string(), "[email] email must be a valid email address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{field}] {message}")]
pub struct ValidationError {
    field: Arc<str>,
    message: String,
}

impl ValidationError {
    /// Creates a new validation error for `field`.
    pub fn new(field: impl Into<Arc<str>>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field the failing Check was attached to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The resolved failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Splits the error into its field and message.
    #[must_use]
    pub fn into_parts(self) -> (Arc<str>, String) {
        (self.field, self.message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Validation errors grouped by field, in the order fields first failed.
///
/// A field that fails several Checks keeps every message, in chain order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.by_field))]
pub struct ValidationErrors {
    by_field: IndexMap<Arc<str>, Vec<ValidationError>>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error under its own field.
    pub fn add(&mut self, error: ValidationError) {
        self.by_field
            .entry(Arc::clone(&error.field))
            .or_default()
            .push(error);
    }

    /// Returns true if any field failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.by_field.is_empty()
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Total number of failed Checks across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.values().map(Vec::len).sum()
    }

    /// Errors recorded for one field.
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[ValidationError] {
        self.by_field.get(field).map_or(&[], Vec::as_slice)
    }

    /// Messages recorded for one field, in chain order.
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.for_field(field)
            .iter()
            .map(ValidationError::message)
            .collect()
    }

    /// Names of the fields that failed, in first-failure order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.by_field.keys().map(AsRef::as_ref)
    }

    /// Iterates over every error, field by field.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.by_field.values().flatten()
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        for error in iter {
            self.add(error);
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        errors.extend(iter);
        errors
    }
}

fn summarize(by_field: &IndexMap<Arc<str>, Vec<ValidationError>>) -> String {
    let errors: Vec<&ValidationError> = by_field.values().flatten().collect();
    let mut summary = format!("Validation failed with {} error(s):\n", errors.len());
    for (i, error) in errors.iter().enumerate() {
        summary.push_str(&format!("  {}. {error}\n", i + 1));
    }
    summary
}

// ============================================================================
// STORE ERRORS
// ============================================================================

/// A failure reported by a [`RecordStore`](crate::store::RecordStore) lookup.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The lookup did not finish in time.
    #[error("store lookup timed out")]
    Timeout,

    /// Any other backend failure.
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps an arbitrary backend error.
    pub fn backend(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(error))
    }
}

/// A store failure attributed to the field whose Check was waiting on it.
#[derive(Debug, thiserror::Error)]
#[error("uniqueness lookup for field '{field}' failed: {source}")]
pub struct StoreFault {
    /// The field whose uniqueness Check hit the failure.
    pub field: Arc<str>,
    /// The underlying store failure.
    #[source]
    pub source: StoreError,
}

// ============================================================================
// CHECK OUTCOME
// ============================================================================

/// Why a single Check did not pass.
///
/// `Rejected` is the ordinary false outcome. `Store` means the Check could
/// not reach a verdict at all.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The value failed the Check.
    #[error(transparent)]
    Rejected(ValidationError),

    /// The backing store failed during the Check.
    #[error(transparent)]
    Store(StoreFault),
}

impl CheckError {
    /// Returns the rejection, if this is one.
    #[must_use]
    pub fn as_rejection(&self) -> Option<&ValidationError> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Store(_) => None,
        }
    }

    /// Returns true for store faults.
    #[must_use]
    pub fn is_store_fault(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// A builder could not produce a chain from its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A uniqueness builder was called without a store handle.
    #[error("{rule} for field '{field}' requires a store handle")]
    MissingStore {
        /// Builder name.
        rule: &'static str,
        /// Field the chain was being built for.
        field: String,
    },

    /// A caller-supplied pattern failed to compile.
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        /// Field the chain was being built for.
        field: String,
        /// Compilation error.
        #[source]
        source: regex::Error,
    },

    /// A bounded builder was given `min > max`.
    #[error("invalid range for field '{field}': min {min} exceeds max {max}")]
    InvalidRange {
        /// Field the chain was being built for.
        field: String,
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },

    /// A rule set could not be parsed.
    #[error("invalid rule set: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// TYPE MISMATCH
// ============================================================================

/// A value had the wrong JSON type for the validator it was fed to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {actual}")]
pub struct TypeMismatch {
    /// Type the validator works on.
    pub expected: &'static str,
    /// Type that was supplied.
    pub actual: &'static str,
}

// ============================================================================
// TESTS
// ============================================================================
