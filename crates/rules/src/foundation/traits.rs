//! Core predicate traits
//!
//! [`Validate`] is the synchronous, typed side of the crate: a pure function
//! of `(input, static configuration)`. [`AsyncPredicate`] is the suspending
//! side, used by Checks that have to ask an external store.

use std::borrow::Borrow;

use async_trait::async_trait;
use serde_json::Value;

use crate::foundation::{AsValidatable, StoreError};

// ============================================================================
// SYNC VALIDATOR TRAIT
// ============================================================================

/// A pure, synchronous predicate over one typed value.
///
/// Implementations never consult or mutate shared state; the verdict depends
/// only on the input and the validator's own configuration. Failure messages
/// are not the validator's concern; they live on the [`Check`](crate::chain::Check)
/// that wraps it.
///
/// # Examples
///
/// ```
/// use formcheck_rules::foundation::Validate;
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn is_valid(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
/// }
///
/// assert!(Even.is_valid(&4));
/// assert!(!Even.is_valid_value(&serde_json::json!("3")));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Returns whether `input` satisfies the validator.
    fn is_valid(&self, input: &Self::Input) -> bool;

    /// Coerces `value` into `Self::Input` and validates it.
    ///
    /// A value that cannot be coerced (wrong JSON type) is simply invalid.
    fn is_valid_value<S>(&self, value: &S) -> bool
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        match value.as_validatable() {
            Ok(input) => self.is_valid(input.borrow()),
            Err(mismatch) => {
                tracing::trace!(%mismatch, "value rejected before validation");
                false
            }
        }
    }
}

// ============================================================================
// ASYNC PREDICATE TRAIT
// ============================================================================

/// A predicate that may suspend while it consults an external resource.
///
/// `Ok(true)` passes, `Ok(false)` rejects the value, and `Err` means no
/// verdict could be reached. Implementations must not hold locks or other
/// shared mutable state across the suspension point.
#[async_trait]
pub trait AsyncPredicate: Send + Sync {
    /// Evaluates the predicate against a record value.
    async fn test(&self, value: &Value) -> Result<bool, StoreError>;
}

// ============================================================================
// TESTS
// ============================================================================
