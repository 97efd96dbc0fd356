//! Typed synchronous validators
//!
//! Every validator here is a pure predicate over one value: no I/O and no
//! shared state. They know nothing about fields or messages; the
//! [`chain`](crate::chain) module wraps them into Checks.
//!
//! Most validators come with a lowercase factory function (`email()`,
//! `length_range(4, 16)`), generated by the [`validator!`](crate::validator)
//! macro where possible.

pub mod collection;
pub mod content;
pub mod credit_card;
pub mod currency;
pub mod date;
pub mod length;
pub mod literal;
pub mod membership;
pub mod pattern;
pub mod phone;
pub mod postal;
pub mod range;

pub use collection::{IsArray, NotEmpty, is_array, not_empty};
pub use content::{Email, EmailDomain, Url, email, email_domain, url};
pub use credit_card::{CreditCard, credit_card};
pub use currency::{Currency, DEFAULT_CURRENCY_SYMBOL};
pub use date::{DEFAULT_DATE_FORMAT, DateFormat};
pub use length::{LengthRange, MaxLength, NotEmptyText, length_range, max_length, not_empty_text};
pub use literal::{BooleanLiteral, JsonDocument, boolean_literal, json_document};
pub use membership::{OneOf, one_of};
pub use pattern::{
    Alpha, Alphanumeric, LatinText, MatchesRegex, alpha, alphanumeric, latin_text, matches_regex,
};
pub use phone::{ANY_LOCALE, Phone, supported_locales};
pub use postal::{DEFAULT_POSTAL_LOCALE, PostalCode};
pub use range::{IntRange, int_range};
