//! Foundation types and traits
//!
//! - **Traits**: [`Validate`] (typed, synchronous) and [`AsyncPredicate`]
//!   (suspending, store-backed)
//! - **Coercion**: [`AsValidatable`] turns record values into typed inputs
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`CheckError`],
//!   [`StoreError`], [`StoreFault`], [`ConfigError`], [`TypeMismatch`]

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{
    CheckError, ConfigError, StoreError, StoreFault, TypeMismatch, ValidationError,
    ValidationErrors,
};
pub use traits::{AsyncPredicate, Validate};
pub use validatable::AsValidatable;

/// A check outcome: `Ok(())` on pass.
pub type CheckResult = Result<(), CheckError>;
