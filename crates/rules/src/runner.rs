//! Reference chain runner
//!
//! Extracts each chain's field from a JSON record, evaluates field groups
//! concurrently and the Checks of one field in order, then folds everything
//! into a [`ValidationReport`].

use std::sync::Arc;

use futures::future::join_all;
use indexmap::IndexMap;
use serde_json::Value;

use crate::chain::{ChainOutcome, Check, CheckChain, ShortCircuit, evaluate_checks};
use crate::foundation::{StoreFault, ValidationErrors};

static NULL: Value = Value::Null;

// ============================================================================
// REPORT
// ============================================================================

/// Everything one validation pass found.
///
/// Rejections and store faults are kept apart: a fault means a verdict
/// could not be reached, not that the input was wrong.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Rejections grouped by field, in first-seen field order.
    pub errors: ValidationErrors,
    /// Store failures hit by uniqueness Checks.
    pub faults: Vec<StoreFault>,
}

impl ValidationReport {
    /// Returns true if nothing was rejected and no store failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.faults.is_empty()
    }

    /// Returns true if any store lookup failed.
    #[must_use]
    pub fn has_faults(&self) -> bool {
        !self.faults.is_empty()
    }

    /// Fields whose store lookups failed, without duplicates.
    #[must_use]
    pub fn faulted_fields(&self) -> Vec<Arc<str>> {
        let mut fields: Vec<Arc<str>> = Vec::new();
        for fault in &self.faults {
            if !fields.contains(&fault.field) {
                fields.push(Arc::clone(&fault.field));
            }
        }
        fields
    }

    /// Rejection messages for one field.
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.errors.messages(field)
    }

    fn absorb(&mut self, outcome: ChainOutcome) {
        self.errors.extend(outcome.errors);
        self.faults.extend(outcome.faults);
    }
}

// ============================================================================
// FIELD LOOKUP
// ============================================================================

/// Looks up a field by dotted path (`address.city`, `items.0`).
///
/// Missing fields, and paths through non-containers, yield `null`.
///
/// # Examples
///
/// ```
/// use formcheck_rules::runner::field_value;
/// use serde_json::json;
///
/// let record = json!({"address": {"city": "Paris"}, "tags": ["a", "b"]});
/// assert_eq!(field_value(&record, "address.city"), &json!("Paris"));
/// assert_eq!(field_value(&record, "tags.1"), &json!("b"));
/// assert!(field_value(&record, "address.zip").is_null());
/// ```
#[must_use]
pub fn field_value<'a>(record: &'a Value, path: &str) -> &'a Value {
    if let Some(value) = record.get(path) {
        return value;
    }
    path.split('.')
        .try_fold(record, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
        .unwrap_or(&NULL)
}

// ============================================================================
// RUNNER
// ============================================================================

/// A reusable set of chains plus a short-circuit policy.
///
/// # Examples
///
/// ```
/// use formcheck_rules::catalog::{EmailConfig, NameConfig, check_email, check_name};
/// use formcheck_rules::runner::ChainRunner;
/// use serde_json::json;
///
/// let runner = ChainRunner::new(vec![
///     check_name(&NameConfig::default()),
///     check_email(&EmailConfig::default()),
/// ]);
///
/// # futures::executor::block_on(async {
/// let report = runner.run(&json!({"name": "Jane Doe", "email": "nope"})).await;
/// assert_eq!(report.messages("email"), ["email must be a valid email address"]);
/// assert!(report.messages("name").is_empty());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChainRunner {
    chains: Vec<CheckChain>,
    policy: ShortCircuit,
}

impl ChainRunner {
    /// Creates a runner that reports every failure.
    #[must_use]
    pub fn new(chains: Vec<CheckChain>) -> Self {
        Self {
            chains,
            policy: ShortCircuit::Continue,
        }
    }

    /// Sets the short-circuit policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_policy(mut self, policy: ShortCircuit) -> Self {
        self.policy = policy;
        self
    }

    /// Adds a chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_chain(mut self, chain: CheckChain) -> Self {
        self.chains.push(chain);
        self
    }

    /// The chains, in registration order.
    #[must_use]
    pub fn chains(&self) -> &[CheckChain] {
        &self.chains
    }

    /// Validates one record.
    pub async fn run(&self, record: &Value) -> ValidationReport {
        run_chains(record, &self.chains, self.policy).await
    }
}

/// Validates `record` against `chains`.
///
/// Checks are grouped by the field each one was built for, so a chain
/// merged from several fields still tests every Check against its own
/// value. Checks for the same field run one after another in the order
/// given; with [`ShortCircuit::StopOnFirstFailure`] a field stops at its
/// first failure. Different fields run concurrently and in no particular
/// order, but the report lists fields in the order they first appear.
pub async fn run_chains(
    record: &Value,
    chains: &[CheckChain],
    policy: ShortCircuit,
) -> ValidationReport {
    let mut by_field: IndexMap<&str, Vec<&Check>> = IndexMap::new();
    for check in chains.iter().flatten() {
        by_field.entry(check.field()).or_default().push(check);
    }

    let passes = by_field.iter().map(|(field, checks)| {
        let value = field_value(record, field);
        evaluate_checks(Arc::from(*field), checks.iter().copied(), value, policy)
    });

    let mut report = ValidationReport::default();
    for outcome in join_all(passes).await {
        report.absorb(outcome);
    }

    tracing::debug!(
        fields = by_field.len(),
        errors = report.errors.len(),
        faults = report.faults.len(),
        "validation pass finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Check;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn rejecting(field: &str, message: &str) -> CheckChain {
        CheckChain::new(field.to_string()).with(Check::sync(
            field.to_string(),
            "never",
            |_| false,
            message.to_string(),
        ))
    }

    #[test]
    fn test_field_value_paths() {
        let record = json!({"a": {"b": [{"c": 1}]}, "x.y": 2});
        assert_eq!(field_value(&record, "a.b.0.c"), &json!(1));
        assert_eq!(field_value(&record, "x.y"), &json!(2));
        assert!(field_value(&record, "a.b.1").is_null());
        assert!(field_value(&record, "a.b.c").is_null());
        assert!(field_value(&json!("scalar"), "a").is_null());
    }

    #[tokio::test]
    async fn test_report_groups_by_field_in_order() {
        let chains = [
            rejecting("b", "b first"),
            rejecting("a", "a only"),
            rejecting("b", "b second"),
        ];
        let report = run_chains(&json!({}), &chains, ShortCircuit::Continue).await;
        assert_eq!(report.errors.fields().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(report.messages("b"), ["b first", "b second"]);
        assert!(!report.is_valid());
        assert!(!report.has_faults());
    }

    #[tokio::test]
    async fn test_stop_spans_chains_of_one_field() {
        let runner = ChainRunner::new(vec![rejecting("b", "b first"), rejecting("b", "b second")])
            .with_policy(ShortCircuit::StopOnFirstFailure)
            .with_chain(rejecting("a", "a only"));
        let report = runner.run(&json!({})).await;
        assert_eq!(report.messages("b"), ["b first"]);
        assert_eq!(report.messages("a"), ["a only"]);
        assert_eq!(runner.chains().len(), 3);
    }

    #[tokio::test]
    async fn test_merged_chain_checks_each_field_value() {
        let long = Check::sync(
            "a",
            "long",
            |v| v.as_str().is_some_and(|s| s.len() >= 4),
            "a too short",
        );
        let letters = Check::sync(
            "b",
            "letters",
            |v| v.as_str().is_some_and(|s| s.chars().all(char::is_alphabetic)),
            "b letters only",
        );
        let merged = [CheckChain::new("a")
            .with(long)
            .merge(CheckChain::new("b").with(letters))];

        let record = json!({"a": "abcd", "b": "123"});
        let report = run_chains(&record, &merged, ShortCircuit::Continue).await;
        assert!(report.messages("a").is_empty());
        assert_eq!(report.messages("b"), ["b letters only"]);

        let record = json!({"a": "abc", "b": "xyz"});
        let report = run_chains(&record, &merged, ShortCircuit::Continue).await;
        assert_eq!(report.messages("a"), ["a too short"]);
        assert!(report.messages("b").is_empty());
    }

    #[tokio::test]
    async fn test_empty_runner_is_valid() {
        let report = ChainRunner::default().run(&json!({"anything": 1})).await;
        assert!(report.is_valid());
        assert!(report.faulted_fields().is_empty());
    }
}
