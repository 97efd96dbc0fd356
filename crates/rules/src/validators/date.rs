//! Calendar date validator driven by a `YYYY-MM-DD` style format.
//!
//! A format is three tokens (`YYYY` or `YY`, `MM`, `DD`, in any order)
//! joined by one delimiter from `/`, `-` or `.`. Each part of the input must
//! have exactly as many digits as its token, and the resulting date must
//! exist (`2023-02-29` is rejected). Two-digit years are read as `20YY`.
//!
//! In lenient mode the input may use any supported delimiter regardless of
//! the one in the format; strict mode requires the format's own delimiter.

use chrono::NaiveDate;

use crate::foundation::Validate;

/// Delimiters recognized in formats and inputs.
const DELIMITERS: [char; 3] = ['/', '-', '.'];

/// Default format for generic date checks.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY/MM/DD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Year { digits: usize },
    Month,
    Day,
}

impl Part {
    const fn width(self) -> usize {
        match self {
            Self::Year { digits } => digits,
            Self::Month | Self::Day => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Layout {
    delimiter: char,
    parts: [Part; 3],
}

impl Layout {
    fn parse(format: &str) -> Option<Self> {
        let delimiter = DELIMITERS.into_iter().find(|d| format.contains(*d))?;
        let tokens: Vec<String> = format
            .split(delimiter)
            .map(str::to_ascii_lowercase)
            .collect();
        if tokens.len() != 3 {
            return None;
        }

        let mut parts = [Part::Month; 3];
        for (slot, token) in parts.iter_mut().zip(&tokens) {
            *slot = match token.as_str() {
                "yyyy" => Part::Year { digits: 4 },
                "yy" => Part::Year { digits: 2 },
                "mm" => Part::Month,
                "dd" => Part::Day,
                _ => return None,
            };
        }

        let years = parts
            .iter()
            .filter(|p| matches!(p, Part::Year { .. }))
            .count();
        let months = parts.iter().filter(|p| **p == Part::Month).count();
        let days = parts.iter().filter(|p| **p == Part::Day).count();
        (years == 1 && months == 1 && days == 1).then_some(Self { delimiter, parts })
    }
}

/// Validates calendar dates against a format.
///
/// # Examples
///
/// ```
/// use formcheck_rules::validators::DateFormat;
/// use formcheck_rules::foundation::Validate;
///
/// let iso = DateFormat::strict("YYYY-MM-DD");
/// assert!(iso.is_valid("2024-02-29"));
/// assert!(!iso.is_valid("2023-02-29"));
/// assert!(!iso.is_valid("2024/02/28"));
///
/// let lenient = DateFormat::lenient("YYYY/MM/DD");
/// assert!(lenient.is_valid("2024-02-28"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    format: String,
    layout: Option<Layout>,
    strict: bool,
}

impl DateFormat {
    /// Creates a validator that requires the format's own delimiter.
    #[must_use]
    pub fn strict(format: &str) -> Self {
        Self::build(format, true)
    }

    /// Creates a validator that accepts any supported delimiter.
    #[must_use]
    pub fn lenient(format: &str) -> Self {
        Self::build(format, false)
    }

    fn build(format: &str, strict: bool) -> Self {
        let layout = Layout::parse(format);
        if layout.is_none() {
            tracing::warn!(format, "unrecognized date format, every value will be rejected");
        }
        Self {
            format: format.to_string(),
            layout,
            strict,
        }
    }

    /// The configured format string.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::lenient(DEFAULT_DATE_FORMAT)
    }
}

impl Validate for DateFormat {
    type Input = str;

    fn is_valid(&self, input: &str) -> bool {
        let Some(layout) = &self.layout else {
            return false;
        };

        let delimiter = if self.strict {
            layout.delimiter
        } else {
            match DELIMITERS.into_iter().find(|d| input.contains(*d)) {
                Some(d) => d,
                None => return false,
            }
        };

        let pieces: Vec<&str> = input.split(delimiter).collect();
        if pieces.len() != layout.parts.len() {
            return false;
        }

        let (mut year, mut month, mut day) = (None, None, None);
        for (piece, part) in pieces.iter().zip(layout.parts) {
            if piece.len() != part.width() || !piece.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            let Ok(number) = piece.parse::<u32>() else {
                return false;
            };
            match part {
                Part::Year { digits: 2 } => year = i32::try_from(2000 + number).ok(),
                Part::Year { .. } => year = i32::try_from(number).ok(),
                Part::Month => month = Some(number),
                Part::Day => day = Some(number),
            }
        }

        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d).is_some(),
            _ => false,
        }
    }
}
