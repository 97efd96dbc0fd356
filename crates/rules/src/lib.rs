//! # formcheck-rules
//!
//! Configurable field-validation rule builders for incoming JSON records.
//!
//! A builder takes a field name plus configuration and returns a
//! [`CheckChain`](chain::CheckChain): the ordered Checks for that field.
//! Checks are synchronous (format, length, range, membership, pattern) or
//! suspending (uniqueness against a backing store), and all of them are
//! evaluated through the same future-returning interface.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_rules::prelude::*;
//! use serde_json::json;
//!
//! let store = StoreHandle::new(MemoryStore::with_records([json!({"email": "taken@example.com"})]));
//!
//! let runner = ChainRunner::new(vec![
//!     check_email(&EmailConfig::default()),
//!     check_unique_email(&UniqueEmailConfig::default().with_store(store)).unwrap(),
//!     check_password(&PasswordConfig::default()),
//! ]);
//!
//! # futures::executor::block_on(async {
//! let report = runner
//!     .run(&json!({"email": "taken@example.com", "password": "Abcdef1!"}))
//!     .await;
//! assert_eq!(report.messages("email"), ["email is already taken"]);
//! assert!(report.messages("password").is_empty());
//! # });
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) and
//!   [`AsyncPredicate`](foundation::AsyncPredicate) traits, value coercion, errors
//! - [`validators`]: typed synchronous validators
//! - [`chain`]: Checks, messages, sanitizers and chains
//! - [`store`] and [`unique`]: the store capability and the uniqueness predicate
//! - [`catalog`]: the builders and their configuration
//! - [`runner`]: a reference runner producing a per-field report

pub mod catalog;
pub mod chain;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod runner;
pub mod store;
pub mod unique;
pub mod validators;
