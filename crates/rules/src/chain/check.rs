//! The Check: one predicate plus one failure message for one field

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use serde_json::Value;

use super::message::{Message, Sanitize};
use crate::foundation::{
    AsValidatable, AsyncPredicate, CheckError, CheckResult, StoreFault, Validate, ValidationError,
};

type SyncTest = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// How a Check reaches its verdict.
#[derive(Clone)]
pub enum Predicate {
    /// Runs to completion without suspending.
    Sync(SyncTest),
    /// May suspend on an external lookup.
    Async(Arc<dyn AsyncPredicate>),
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("Sync(..)"),
            Self::Async(_) => f.write_str("Async(..)"),
        }
    }
}

/// A single validation unit: a predicate and the message reported when it
/// does not hold.
///
/// Checks are immutable once built and may be evaluated any number of times,
/// concurrently, against different values. Synchronous and suspending Checks
/// share one interface: [`Check::evaluate`] always returns a future, already
/// resolved for synchronous predicates.
///
/// # Examples
///
/// ```
/// use formcheck_rules::chain::Check;
/// use formcheck_rules::validators::length_range;
/// use serde_json::json;
///
/// let check = Check::from_validator(
///     "username",
///     "length",
///     length_range(4, 16),
///     "username must be between 4 and 16 characters",
/// );
///
/// # futures::executor::block_on(async {
/// assert!(check.evaluate(&json!("jane")).await.is_ok());
/// let error = check.evaluate(&json!("jo")).await.unwrap_err();
/// assert_eq!(
///     error.as_rejection().unwrap().message(),
///     "username must be between 4 and 16 characters"
/// );
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Check {
    field: Arc<str>,
    name: &'static str,
    predicate: Predicate,
    message: Message,
    sanitize: Sanitize,
}

impl Check {
    /// Wraps a typed validator. Values that cannot be coerced to the
    /// validator's input type fail the Check.
    pub fn from_validator<V>(
        field: impl Into<Arc<str>>,
        name: &'static str,
        validator: V,
        message: impl Into<Message>,
    ) -> Self
    where
        V: Validate + Send + Sync + 'static,
        Value: AsValidatable<V::Input>,
        for<'a> <Value as AsValidatable<V::Input>>::Output<'a>: Borrow<V::Input>,
    {
        Self::sync(
            field,
            name,
            move |value| validator.is_valid_value(value),
            message,
        )
    }

    /// Creates a Check from a synchronous closure.
    pub fn sync(
        field: impl Into<Arc<str>>,
        name: &'static str,
        test: impl Fn(&Value) -> bool + Send + Sync + 'static,
        message: impl Into<Message>,
    ) -> Self {
        Self {
            field: field.into(),
            name,
            predicate: Predicate::Sync(Arc::new(test)),
            message: message.into(),
            sanitize: Sanitize::None,
        }
    }

    /// Creates a Check backed by a suspending predicate.
    pub fn suspending(
        field: impl Into<Arc<str>>,
        name: &'static str,
        predicate: Arc<dyn AsyncPredicate>,
        message: impl Into<Message>,
    ) -> Self {
        Self {
            field: field.into(),
            name,
            predicate: Predicate::Async(predicate),
            message: message.into(),
            sanitize: Sanitize::None,
        }
    }

    /// Normalizes the value before testing it.
    #[must_use = "builder methods must be chained or built"]
    pub fn sanitized(mut self, sanitize: Sanitize) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// The field this Check reports under.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Short identifier of what the Check tests (`"length"`, `"uppercase"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The sanitizer applied before testing.
    #[must_use]
    pub const fn sanitize(&self) -> Sanitize {
        self.sanitize
    }

    /// The failure message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Returns true if the Check may suspend.
    #[must_use]
    pub const fn is_async(&self) -> bool {
        matches!(self.predicate, Predicate::Async(_))
    }

    /// Evaluates the Check against one field value.
    ///
    /// Resolves to `Ok(())` on pass, [`CheckError::Rejected`] with the
    /// resolved message on failure, or [`CheckError::Store`] when a
    /// suspending predicate could not reach a verdict.
    pub fn evaluate<'a>(&'a self, value: &'a Value) -> BoxFuture<'a, CheckResult> {
        let value = self.sanitize.apply(value);
        match &self.predicate {
            Predicate::Sync(test) => {
                let passed = test(&*value);
                future::ready(self.verdict(passed, &value)).boxed()
            }
            Predicate::Async(predicate) => async move {
                match predicate.test(&value).await {
                    Ok(passed) => self.verdict(passed, &value),
                    Err(source) => {
                        tracing::warn!(
                            field = %self.field,
                            check = self.name,
                            error = %source,
                            "store lookup failed"
                        );
                        Err(CheckError::Store(StoreFault {
                            field: Arc::clone(&self.field),
                            source,
                        }))
                    }
                }
            }
            .boxed(),
        }
    }

    fn verdict(&self, passed: bool, value: &Value) -> CheckResult {
        tracing::trace!(field = %self.field, check = self.name, passed, "check evaluated");
        if passed {
            Ok(())
        } else {
            Err(CheckError::Rejected(ValidationError::new(
                Arc::clone(&self.field),
                self.message.resolve(value),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::message::display_value;
    use crate::foundation::StoreError;
    use async_trait::async_trait;
    use serde_json::json;

    struct Flaky;

    #[async_trait]
    impl AsyncPredicate for Flaky {
        async fn test(&self, value: &Value) -> Result<bool, StoreError> {
            match value {
                Value::String(text) if text == "down" => {
                    Err(StoreError::Unavailable("connection refused".into()))
                }
                Value::String(text) => Ok(text != "taken"),
                _ => Ok(false),
            }
        }
    }

    #[tokio::test]
    async fn test_sync_check_verdicts() {
        let check = Check::sync(
            "age",
            "positive",
            |v| v.as_i64().is_some_and(|n| n > 0),
            "age must be positive",
        );
        assert!(!check.is_async());
        assert!(check.evaluate(&json!(3)).await.is_ok());

        let error = check.evaluate(&json!(-1)).await.unwrap_err();
        let rejection = error.as_rejection().unwrap();
        assert_eq!(rejection.field(), "age");
        assert_eq!(rejection.message(), "age must be positive");
    }

    #[tokio::test]
    async fn test_sanitize_runs_before_predicate() {
        let check = Check::sync("name", "exact", |v| v == "Jane", "name must be Jane")
            .sanitized(Sanitize::Trim);
        assert!(check.evaluate(&json!("  Jane ")).await.is_ok());
    }

    #[tokio::test]
    async fn test_dynamic_message_sees_value() {
        let check = Check::sync(
            "role",
            "membership",
            |_| false,
            Message::dynamic(|v| format!("{} is not a role", display_value(v))),
        );
        let error = check.evaluate(&json!("root")).await.unwrap_err();
        assert_eq!(error.as_rejection().unwrap().message(), "root is not a role");
    }

    #[tokio::test]
    async fn test_async_check_separates_faults_from_rejections() {
        let check =
            Check::suspending("email", "unique", Arc::new(Flaky), "email is already taken");
        assert!(check.is_async());
        assert!(check.evaluate(&json!("free")).await.is_ok());

        let rejected = check.evaluate(&json!("taken")).await.unwrap_err();
        assert!(!rejected.is_store_fault());

        let fault = check.evaluate(&json!("down")).await.unwrap_err();
        assert!(fault.is_store_fault());
        assert!(fault.as_rejection().is_none());
    }
}
