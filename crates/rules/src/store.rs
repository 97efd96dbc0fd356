//! Backing-store capability for uniqueness Checks
//!
//! The crate needs exactly one operation from a store: find a record
//! matching an equality [`Criteria`]. Hosts implement [`RecordStore`] over
//! their own database and hand it to builders as a [`StoreHandle`]. The
//! handle is shared and read-only; connection lifecycle stays with the host.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::foundation::StoreError;

// ============================================================================
// CRITERIA
// ============================================================================

/// An equality lookup: every key must equal its value.
///
/// Keys keep insertion order, so the primary key comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria(IndexMap<String, Value>);

impl Criteria {
    /// Creates criteria with a single key.
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        let mut map = IndexMap::with_capacity(2);
        map.insert(key.into(), value);
        Self(map)
    }

    /// Adds another equality condition.
    #[must_use = "builder methods must be chained or built"]
    pub fn and(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// The value required for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` conditions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns true if `record` satisfies every condition.
    ///
    /// Keys are looked up as top-level attributes of a JSON object.
    #[must_use]
    pub fn matches(&self, record: &Value) -> bool {
        self.iter()
            .all(|(key, expected)| record.get(key) == Some(expected))
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

// ============================================================================
// STORE TRAIT
// ============================================================================

/// A store that can look up one record by equality criteria.
///
/// `Ok(None)` means no record matched. Errors are reported to callers as
/// store faults, never as validation failures.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns one record matching `criteria`, if any.
    async fn find_one(&self, criteria: &Criteria) -> Result<Option<Value>, StoreError>;
}

/// A shared, cheaply cloneable reference to a [`RecordStore`].
#[derive(Clone)]
pub struct StoreHandle(Arc<dyn RecordStore>);

impl StoreHandle {
    /// Wraps a store.
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    /// Wraps an already shared store.
    pub fn from_arc(store: Arc<dyn RecordStore>) -> Self {
        Self(store)
    }

    /// Looks up one record.
    pub async fn find_one(&self, criteria: &Criteria) -> Result<Option<Value>, StoreError> {
        self.0.find_one(criteria).await
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreHandle").finish_non_exhaustive()
    }
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// A [`RecordStore`] over an in-memory list of JSON records.
///
/// Useful for tests and for hosts that keep small reference tables in memory.
///
/// # Examples
///
/// ```
/// use formcheck_rules::store::{Criteria, MemoryStore, RecordStore};
/// use serde_json::json;
///
/// let store = MemoryStore::with_records([json!({"email": "a@x.com"})]);
///
/// # futures::executor::block_on(async {
/// let found = store.find_one(&Criteria::new("email", json!("a@x.com"))).await.unwrap();
/// assert!(found.is_some());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`.
    pub fn with_records(records: impl IntoIterator<Item = Value>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }

    /// Adds a record.
    pub fn insert(&self, record: Value) {
        self.records.write().push(record);
    }

    /// Removes every record matching `criteria` and returns how many went.
    pub fn remove(&self, criteria: &Criteria) -> usize {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| !criteria.matches(record));
        before - records.len()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_one(&self, criteria: &Criteria) -> Result<Option<Value>, StoreError> {
        let found = self
            .records
            .read()
            .iter()
            .find(|record| criteria.matches(record))
            .cloned();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_criteria_matching() {
        let criteria = Criteria::new("username", json!("jane")).and("locale", json!("en-US"));
        assert_eq!(criteria.len(), 2);
        assert!(criteria.matches(&json!({"username": "jane", "locale": "en-US", "id": 1})));
        assert!(!criteria.matches(&json!({"username": "jane", "locale": "fr-FR"})));
        assert!(!criteria.matches(&json!({"username": "jane"})));
        assert!(!criteria.matches(&json!("jane")));
    }

    #[test]
    fn test_criteria_display() {
        let criteria = Criteria::new("email", json!("a@x.com")).and("active", json!(true));
        assert_eq!(criteria.to_string(), r#"{email: "a@x.com", active: true}"#);
    }

    #[tokio::test]
    async fn test_memory_store_lookup() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.insert(json!({"email": "a@x.com"}));

        let hit = store
            .find_one(&Criteria::new("email", json!("a@x.com")))
            .await
            .unwrap();
        assert_eq!(hit, Some(json!({"email": "a@x.com"})));

        let miss = store
            .find_one(&Criteria::new("email", json!("b@x.com")))
            .await
            .unwrap();
        assert_eq!(miss, None);
    }

    #[tokio::test]
    async fn test_handle_delegates() {
        let handle = StoreHandle::new(MemoryStore::with_records([json!({"id": 7})]));
        let found = handle.find_one(&Criteria::new("id", json!(7))).await.unwrap();
        assert!(found.is_some());
        assert_eq!(format!("{handle:?}"), "StoreHandle(..)");
    }

    #[test]
    fn test_memory_store_remove() {
        let store = MemoryStore::with_records([json!({"id": 1}), json!({"id": 2}), json!({"id": 1})]);
        assert_eq!(store.remove(&Criteria::new("id", json!(1))), 2);
        assert_eq!(store.len(), 1);
    }
}
