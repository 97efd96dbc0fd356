//! Prelude module for convenient imports.
//!
//! ```
//! use formcheck_rules::prelude::*;
//!
//! let chain = check_length(&LengthConfig::for_field("username").with_bounds(3, 20));
//! assert_eq!(chain.field(), "username");
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    AsValidatable, AsyncPredicate, CheckError, CheckResult, ConfigError, StoreError, StoreFault,
    Validate, ValidationError, ValidationErrors,
};

// ============================================================================
// CHAINS
// ============================================================================

pub use crate::chain::{ChainOutcome, Check, CheckChain, Message, Sanitize, ShortCircuit};

// ============================================================================
// BUILDERS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::catalog::*;

// ============================================================================
// STORE & RUNNER
// ============================================================================

pub use crate::runner::{ChainRunner, ValidationReport, run_chains};
pub use crate::store::{Criteria, MemoryStore, RecordStore, StoreHandle};
pub use crate::unique::Unique;
