//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! length 5 regardless of its UTF-8 byte count.

crate::validator! {
    /// Validates that a string's length lies within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LengthRange { min: usize, max: usize } for str;
    rule(self, input) { (self.min..=self.max).contains(&input.chars().count()) }
    fn length_range(min: usize, max: usize);
}

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    fn max_length(max: usize);
}

crate::validator! {
    /// Validates that a string is not empty.
    pub NotEmptyText for str;
    rule(input) { !input.is_empty() }
    fn not_empty_text();
}
