#![forbid(unsafe_code)]

//! Standard string rules.
//!
//! Every regex-based rule trims the value first and passes only when the
//! first match spans the whole trimmed string, so an expression matches
//! the value as a whole whether or not it carries its own anchors.

use std::fmt;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::Predicate;

// ---------------------------------------------------------------------------
// InvalidPattern
// ---------------------------------------------------------------------------

/// Construction error for a rule whose expression does not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPattern {
    /// The expression that failed to compile.
    pub expression: String,
    /// Compiler diagnostic.
    pub message: String,
}

impl fmt::Display for InvalidPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid rule pattern `{}`: {}",
            self.expression, self.message
        )
    }
}

impl std::error::Error for InvalidPattern {}

// ---------------------------------------------------------------------------
// Matching helpers
// ---------------------------------------------------------------------------

fn fully_matches(re: &Regex, value: &str) -> bool {
    re.find(value)
        .is_some_and(|m| m.start() == 0 && m.end() == value.len())
}

fn built_in(expr: &str) -> Regex {
    Regex::new(expr).expect("built-in rule pattern compiles")
}

fn trimmed_len(value: &str) -> usize {
    value.trim().graphemes(true).count()
}

// ---------------------------------------------------------------------------
// Pattern rules
// ---------------------------------------------------------------------------

/// Valid iff the trimmed value matches `expr` in full.
///
/// The expression is compiled here, so a malformed pattern is rejected
/// once at construction rather than on every evaluation.
pub fn pattern(
    expr: &str,
    message: impl Into<String>,
) -> Result<Predicate<str>, InvalidPattern> {
    let re = Regex::new(expr).map_err(|err| InvalidPattern {
        expression: expr.to_string(),
        message: err.to_string(),
    })?;
    Ok(Predicate::new(message, move |value: &str| {
        fully_matches(&re, value.trim())
    }))
}

/// Valid iff the trimmed value is a well-formed email address.
pub fn email(message: impl Into<String>) -> Predicate<str> {
    let re = built_in(r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}");
    Predicate::new(message, move |value: &str| {
        fully_matches(&re, value.trim())
    })
}

/// Valid iff the trimmed value is a formatted phone number such as
/// `+1 (555)-123-4567`.
pub fn phone(message: impl Into<String>) -> Predicate<str> {
    let re = built_in(r"\+[0-9]{1,2} \([0-9]{3}\)-[0-9]{3}-[0-9]{4}$");
    Predicate::new(message, move |value: &str| {
        fully_matches(&re, value.trim())
    })
}

/// Valid iff the trimmed value is a five-digit US ZIP code, with an
/// optional plus-four extension.
pub fn zip(message: impl Into<String>) -> Predicate<str> {
    let re = built_in(r"^\d{5}(?:[-\s]\d{4})?$");
    Predicate::new(message, move |value: &str| {
        fully_matches(&re, value.trim())
    })
}

/// Valid iff the trimmed value is a non-empty decimal number without a
/// leading zero (`0`, `42`, `0.5`, `.5` pass; `01`, `.`, `1.` do not).
pub fn number(message: impl Into<String>) -> Predicate<str> {
    let re = built_in(r"^(?:[1-9]\d*|0)?(?:\.\d+)?$");
    Predicate::new(message, move |value: &str| {
        let trimmed = value.trim();
        !trimmed.is_empty() && fully_matches(&re, trimmed)
    })
}

/// Valid iff the trimmed value is exactly `count` digits.
pub fn digits(count: usize, message: impl Into<String>) -> Predicate<str> {
    let re = built_in(&format!("[0-9]{{{count}}}"));
    Predicate::new(message, move |value: &str| {
        fully_matches(&re, value.trim())
    })
}

/// Valid iff the trimmed value uses only personal-name characters
/// (letters, spaces, commas, periods, apostrophes, hyphens).
pub fn name(message: impl Into<String>) -> Predicate<str> {
    let re = built_in(r"^[a-zA-Z ,\.'-]+$");
    Predicate::new(message, move |value: &str| {
        fully_matches(&re, value.trim())
    })
}

// ---------------------------------------------------------------------------
// Length and emptiness rules
// ---------------------------------------------------------------------------

/// Always valid.
pub fn any() -> Predicate<str> {
    Predicate::silent(|_| true)
}

/// Always invalid.
pub fn none() -> Predicate<str> {
    Predicate::silent(|_| false)
}

/// Valid iff the value is empty.
pub fn empty() -> Predicate<str> {
    Predicate::silent(str::is_empty)
}

/// Valid iff the value is non-empty.
pub fn not_empty() -> Predicate<str> {
    Predicate::silent(|value: &str| !value.is_empty())
}

/// Valid iff the value is **non-empty**, reporting `message` otherwise.
///
/// Note the sense is inverted relative to [`empty`]; existing callers
/// depend on this pairing.
pub fn empty_with(message: impl Into<String>) -> Predicate<str> {
    Predicate::new(message, |value: &str| !value.is_empty())
}

/// Valid iff the value is **empty**, reporting `message` otherwise.
///
/// Note the sense is inverted relative to [`not_empty`]; existing callers
/// depend on this pairing.
pub fn not_empty_with(message: impl Into<String>) -> Predicate<str> {
    Predicate::new(message, str::is_empty)
}

/// Valid iff the trimmed value has at least `n` characters.
pub fn min(n: usize, message: impl Into<String>) -> Predicate<str> {
    Predicate::new(message, move |value: &str| trimmed_len(value) >= n)
}

/// Valid iff the trimmed value has at most `n` characters.
pub fn max(n: usize, message: impl Into<String>) -> Predicate<str> {
    Predicate::new(message, move |value: &str| trimmed_len(value) <= n)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
