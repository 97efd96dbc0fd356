//! Asynchronous uniqueness predicate
//!
//! A [`Unique`] predicate asks the store whether a record already holds the
//! value. Every evaluation builds a fresh [`UniqueQuery`], so concurrent
//! evaluations against the same store never share query state.

use async_trait::async_trait;
use serde_json::Value;

use crate::foundation::{AsyncPredicate, StoreError};
use crate::store::{Criteria, StoreHandle};

/// One uniqueness lookup: the store to ask and the criteria to ask with.
///
/// Built immediately before the lookup and dropped right after it.
#[derive(Debug, Clone)]
pub struct UniqueQuery<'a> {
    store: &'a StoreHandle,
    criteria: Criteria,
}

impl<'a> UniqueQuery<'a> {
    /// Creates a lookup of `key = value`.
    #[must_use]
    pub fn new(store: &'a StoreHandle, key: &str, value: Value) -> Self {
        Self {
            store,
            criteria: Criteria::new(key, value),
        }
    }

    /// Narrows the lookup with another equality condition.
    #[must_use = "builder methods must be chained or built"]
    pub fn scoped(mut self, key: &str, value: Value) -> Self {
        self.criteria = self.criteria.and(key, value);
        self
    }

    /// The criteria sent to the store.
    #[must_use]
    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Runs the lookup. Returns true if no record matched.
    pub async fn is_free(&self) -> Result<bool, StoreError> {
        let existing = self.store.find_one(&self.criteria).await?;
        tracing::trace!(criteria = %self.criteria, taken = existing.is_some(), "uniqueness lookup");
        Ok(existing.is_none())
    }
}

/// Passes when no stored record has the value under `key` (and, if scoped,
/// the scope value under the scope key).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use formcheck_rules::chain::Check;
/// use formcheck_rules::store::{MemoryStore, StoreHandle};
/// use formcheck_rules::unique::Unique;
/// use serde_json::json;
///
/// let store = StoreHandle::new(MemoryStore::with_records([json!({"email": "a@x.com"})]));
/// let check = Check::suspending(
///     "email",
///     "unique",
///     Arc::new(Unique::new(store, "email")),
///     "email is already taken",
/// );
///
/// # futures::executor::block_on(async {
/// assert!(check.evaluate(&json!("a@x.com")).await.is_err());
/// assert!(check.evaluate(&json!("b@x.com")).await.is_ok());
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Unique {
    store: StoreHandle,
    key: String,
    scope: Option<(String, Value)>,
}

impl Unique {
    /// Creates a predicate that looks the value up under `key`.
    pub fn new(store: StoreHandle, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            scope: None,
        }
    }

    /// Restricts the lookup to records whose `key` attribute equals `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn within(mut self, key: impl Into<String>, value: Value) -> Self {
        self.scope = Some((key.into(), value));
        self
    }

    /// The attribute the value is looked up under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Builds the lookup for one value.
    #[must_use]
    pub fn query(&self, value: &Value) -> UniqueQuery<'_> {
        let query = UniqueQuery::new(&self.store, &self.key, value.clone());
        match &self.scope {
            Some((key, scope)) => query.scoped(key, scope.clone()),
            None => query,
        }
    }
}

#[async_trait]
impl AsyncPredicate for Unique {
    async fn test(&self, value: &Value) -> Result<bool, StoreError> {
        self.query(value).is_free().await
    }
}
