//! Macros for declaring validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_rules::validator;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     fn not_blank();
//! }
//!
//! // Struct with fields and a custom constructor
//! validator! {
//!     pub LengthRange { min: usize, max: usize } for str;
//!     rule(self, input) { (self.min..=self.max).contains(&input.chars().count()) }
//!     new(min: usize, max: usize) { Self { min, max } }
//!     fn length_range(min: usize, max: usize);
//! }
//! ```

/// Declares a validator: struct definition, [`Validate`](crate::foundation::Validate)
/// implementation and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Unit validators additionally
/// derive `Copy, PartialEq, Eq, Hash, Default`.
///
/// # Variants
///
/// **Unit validator**:
/// ```rust,ignore
/// validator! {
///     pub Alpha for str;
///     rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphabetic()) }
///     fn alpha();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub IntRange { min: i64, max: i64 } for i64;
///     rule(self, input) { (self.min..=self.max).contains(input) }
///     fn int_range(min: i64, max: i64);
/// }
/// ```
///
/// **Custom constructor**:
/// ```rust,ignore
/// validator! {
///     pub Matches { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     new(pattern: regex::Regex) { Self { pattern } }
///     fn matches(pattern: regex::Regex);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn is_valid(&self, $inp: &Self::Input) -> bool $rule
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn is_valid(&$self_, $inp: &Self::Input) -> bool $rule
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn is_valid(&$self_, $inp: &Self::Input) -> bool $rule
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
