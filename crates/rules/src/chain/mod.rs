//! Checks and Check Chains
//!
//! A [`Check`] is one predicate plus one message. A [`CheckChain`] is the
//! ordered list of Checks a builder produces for one field. Chains are plain
//! values: building one has no side effects, and evaluating one never
//! mutates it.

mod check;
mod message;

pub use check::{Check, Predicate};
pub use message::{Message, Sanitize};
pub(crate) use message::display_value;

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use smallvec::SmallVec;

use crate::foundation::{CheckError, StoreFault, ValidationError};

// ============================================================================
// SHORT-CIRCUIT POLICY
// ============================================================================

/// Whether evaluation of a chain continues after a failed Check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortCircuit {
    /// Evaluate every Check and report every failure.
    #[default]
    Continue,
    /// Stop at the first Check that does not pass.
    StopOnFirstFailure,
}

// ============================================================================
// CHECK CHAIN
// ============================================================================

/// The ordered Checks produced for one field by one builder call.
///
/// # Examples
///
/// ```
/// use formcheck_rules::chain::{Check, CheckChain, ShortCircuit};
/// use formcheck_rules::validators::{alpha, length_range};
/// use serde_json::json;
///
/// let chain = CheckChain::new("city")
///     .with(Check::from_validator("city", "length", length_range(2, 20), "too short"))
///     .with(Check::from_validator("city", "alpha", alpha(), "letters only"));
///
/// # futures::executor::block_on(async {
/// let outcome = chain.evaluate(&json!("1"), ShortCircuit::Continue).await;
/// assert_eq!(outcome.messages(), ["too short", "letters only"]);
///
/// let outcome = chain.evaluate(&json!("1"), ShortCircuit::StopOnFirstFailure).await;
/// assert_eq!(outcome.messages(), ["too short"]);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct CheckChain {
    field: Arc<str>,
    checks: SmallVec<[Check; 4]>,
}

impl CheckChain {
    /// Creates an empty chain for `field`.
    pub fn new(field: impl Into<Arc<str>>) -> Self {
        Self {
            field: field.into(),
            checks: SmallVec::new(),
        }
    }

    /// Appends a Check.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Appends a Check in place.
    pub fn push(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Appends every Check of `other`, after this chain's own.
    ///
    /// Merged Checks keep the field they were built for. The runner looks
    /// each Check's value up under that field; [`CheckChain::evaluate`]
    /// tests every Check against the one value it is given.
    #[must_use = "builder methods must be chained or built"]
    pub fn merge(mut self, other: Self) -> Self {
        if other.field != self.field {
            tracing::debug!(
                field = %self.field,
                other = %other.field,
                "merging chains built for different fields"
            );
        }
        self.checks.extend(other.checks);
        self
    }

    /// The field this chain was built for.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Number of Checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if the chain has no Checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The Checks, in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Iterates over the Checks in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Check> {
        self.checks.iter()
    }

    /// Names of the Checks, in evaluation order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(Check::name).collect()
    }

    /// Returns true if any Check may suspend.
    #[must_use]
    pub fn has_async(&self) -> bool {
        self.checks.iter().any(Check::is_async)
    }

    /// Evaluates every Check against `value`, one after another in
    /// declaration order.
    pub async fn evaluate(&self, value: &Value, policy: ShortCircuit) -> ChainOutcome {
        evaluate_checks(Arc::clone(&self.field), &self.checks, value, policy).await
    }

    pub(crate) fn built(self, rule: &'static str) -> Self {
        tracing::debug!(rule, field = %self.field, checks = self.len(), "check chain built");
        self
    }
}

/// Runs `checks` in order against `value`, stopping early if `policy` says so.
pub(crate) async fn evaluate_checks<'a>(
    field: Arc<str>,
    checks: impl IntoIterator<Item = &'a Check>,
    value: &Value,
    policy: ShortCircuit,
) -> ChainOutcome {
    let mut outcome = ChainOutcome::new(field);
    for check in checks {
        outcome.evaluated += 1;
        match check.evaluate(value).await {
            Ok(()) => continue,
            Err(CheckError::Rejected(error)) => outcome.errors.push(error),
            Err(CheckError::Store(fault)) => outcome.faults.push(fault),
        }
        if policy == ShortCircuit::StopOnFirstFailure {
            break;
        }
    }
    outcome
}

impl<'a> IntoIterator for &'a CheckChain {
    type Item = &'a Check;
    type IntoIter = std::slice::Iter<'a, Check>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Check> for CheckChain {
    fn extend<I: IntoIterator<Item = Check>>(&mut self, iter: I) {
        self.checks.extend(iter);
    }
}

// ============================================================================
// CHAIN OUTCOME
// ============================================================================

/// The result of evaluating one chain against one value.
#[derive(Debug)]
pub struct ChainOutcome {
    /// The chain's field.
    pub field: Arc<str>,
    /// Number of Checks that ran.
    pub evaluated: usize,
    /// Rejections, in chain order.
    pub errors: Vec<ValidationError>,
    /// Store faults, in chain order.
    pub faults: Vec<StoreFault>,
}

impl ChainOutcome {
    fn new(field: Arc<str>) -> Self {
        Self {
            field,
            evaluated: 0,
            errors: Vec::new(),
            faults: Vec::new(),
        }
    }

    /// Returns true if every Check that ran passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.faults.is_empty()
    }

    /// Rejection messages, in chain order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn always(field: &str, name: &'static str, pass: bool) -> Check {
        Check::sync(field.to_string(), name, move |_| pass, format!("{name} failed"))
    }

    #[tokio::test]
    async fn test_chain_preserves_order() {
        let chain = CheckChain::new("code")
            .with(always("code", "first", false))
            .with(always("code", "second", true))
            .with(always("code", "third", false));

        assert_eq!(chain.names(), ["first", "second", "third"]);
        let outcome = chain.evaluate(&json!("x"), ShortCircuit::Continue).await;
        assert_eq!(outcome.evaluated, 3);
        assert_eq!(outcome.messages(), ["first failed", "third failed"]);
        assert!(!outcome.is_valid());
    }

    #[tokio::test]
    async fn test_stop_on_first_failure() {
        let chain = CheckChain::new("code")
            .with(always("code", "first", true))
            .with(always("code", "second", false))
            .with(always("code", "third", false));

        let outcome = chain
            .evaluate(&json!("x"), ShortCircuit::StopOnFirstFailure)
            .await;
        assert_eq!(outcome.evaluated, 2);
        assert_eq!(outcome.messages(), ["second failed"]);
    }

    #[tokio::test]
    async fn test_empty_chain_is_valid() {
        let outcome = CheckChain::new("free")
            .evaluate(&json!(null), ShortCircuit::Continue)
            .await;
        assert!(outcome.is_valid());
        assert_eq!(outcome.evaluated, 0);
    }

    #[test]
    fn test_merge_appends() {
        let merged = CheckChain::new("a")
            .with(always("a", "one", true))
            .merge(CheckChain::new("a").with(always("a", "two", true)));
        assert_eq!(merged.names(), ["one", "two"]);
        assert_eq!(merged.len(), 2);
        assert!(!merged.has_async());
    }

    #[test]
    fn test_short_circuit_deserializes() {
        let policy: ShortCircuit = serde_json::from_value(json!("stop_on_first_failure")).unwrap();
        assert_eq!(policy, ShortCircuit::StopOnFirstFailure);
    }
}
