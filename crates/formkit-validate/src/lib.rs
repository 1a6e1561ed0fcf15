#![forbid(unsafe_code)]

//! Composable predicate validation.
//!
//! A [`Validator`] maps a value to a [`Verdict`]: valid, or invalid with a
//! human-readable message. Leaves are [`Predicate`]s (a check plus a
//! failure message); [`And`], [`Or`], [`Not`], [`All`], and [`Any`] compose
//! them, and [`Rules`] builds an [`All`] fluently.
//!
//! The [`text`] module carries the standard string rules (email, phone,
//! zip, length bounds, and friends).
//!
//! # Example
//!
//! ```rust
//! use formkit_validate::{text, Rules, Validator};
//!
//! let username = Rules::new()
//!     .not_empty()
//!     .min(3, "too short")
//!     .max(20, "too long")
//!     .build();
//!
//! assert!(username.validate("alice").is_valid());
//! assert!(username.validate("ab").is_invalid());
//! assert!(text::email("bad address").validate("a@b.com").is_valid());
//! ```

use std::fmt;

pub mod text;

pub use text::InvalidPattern;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// The outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Verdict {
    /// The value passed.
    #[default]
    Valid,
    /// The value failed, with a message for the user (possibly empty).
    Invalid(String),
}

impl Verdict {
    /// Returns `true` if the verdict is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the verdict is `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }

    /// Combine two verdicts, keeping the first failure.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Valid => other,
            Self::Invalid(_) => self,
        }
    }

    /// Combine two verdicts, passing if either passes.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Valid => Self::Valid,
            Self::Invalid(_) => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Validator trait
// ---------------------------------------------------------------------------

/// A rule mapping values of type `T` to a [`Verdict`].
///
/// Validators are immutable after construction and side-effect free:
/// `validate` is a pure function of the receiver's configuration and the
/// input.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Evaluate the rule against `value`.
    fn validate(&self, value: &T) -> Verdict;
}

// ---------------------------------------------------------------------------
// Predicate – the leaf validator
// ---------------------------------------------------------------------------

/// A leaf validator: a boolean check plus a failure message.
pub struct Predicate<T: ?Sized> {
    check: Box<dyn Fn(&T) -> bool + Send + Sync>,
    message: String,
}

impl<T: ?Sized> Predicate<T> {
    /// Create a predicate with a failure message.
    pub fn new(
        message: impl Into<String>,
        check: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            check: Box::new(check),
            message: message.into(),
        }
    }

    /// Create a predicate with an empty failure message.
    pub fn silent(check: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::new("", check)
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T: ?Sized> Validator<T> for Predicate<T> {
    fn validate(&self, value: &T) -> Verdict {
        if (self.check)(value) {
            Verdict::Valid
        } else {
            Verdict::Invalid(self.message.clone())
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Composition validators
// ---------------------------------------------------------------------------

/// Combines two validators; both must pass, the first failure wins.
#[derive(Debug, Clone)]
pub struct And<A, B> {
    /// First validator.
    pub first: A,
    /// Second validator.
    pub second: B,
}

impl<A, B> And<A, B> {
    /// Create a new `And` validator.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A, B> Validator<T> for And<A, B>
where
    A: Validator<T>,
    B: Validator<T>,
{
    fn validate(&self, value: &T) -> Verdict {
        match self.first.validate(value) {
            Verdict::Valid => self.second.validate(value),
            failed => failed,
        }
    }
}

/// Combines two validators; at least one must pass.
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    /// First validator.
    pub first: A,
    /// Second validator.
    pub second: B,
}

impl<A, B> Or<A, B> {
    /// Create a new `Or` validator.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A, B> Validator<T> for Or<A, B>
where
    A: Validator<T>,
    B: Validator<T>,
{
    fn validate(&self, value: &T) -> Verdict {
        match self.first.validate(value) {
            Verdict::Valid => Verdict::Valid,
            _ => self.second.validate(value),
        }
    }
}

/// Negates a validator, failing with `message` when the inner rule passes.
#[derive(Debug, Clone)]
pub struct Not<V> {
    /// Inner validator.
    pub inner: V,
    /// Message reported when the inner validator passes.
    pub message: String,
}

impl<V> Not<V> {
    /// Create a new `Not` validator.
    #[must_use]
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<T: ?Sized, V> Validator<T> for Not<V>
where
    V: Validator<T>,
{
    fn validate(&self, value: &T) -> Verdict {
        match self.inner.validate(value) {
            Verdict::Valid => Verdict::Invalid(self.message.clone()),
            Verdict::Invalid(_) => Verdict::Valid,
        }
    }
}

/// Combines any number of validators; all must pass, first failure wins.
pub struct All<T: ?Sized> {
    validators: Vec<Box<dyn Validator<T>>>,
}

impl<T: ?Sized> All<T> {
    /// Create a new `All` validator.
    #[must_use]
    pub fn new(validators: Vec<Box<dyn Validator<T>>>) -> Self {
        Self { validators }
    }
}

impl<T: ?Sized> Validator<T> for All<T> {
    fn validate(&self, value: &T) -> Verdict {
        for validator in &self.validators {
            let verdict = validator.validate(value);
            if verdict.is_invalid() {
                return verdict;
            }
        }
        Verdict::Valid
    }
}

impl<T: ?Sized> fmt::Debug for All<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field(
                "validators",
                &format!("[{} validators]", self.validators.len()),
            )
            .finish()
    }
}

/// Combines any number of validators; the first pass wins, the last
/// failure is reported.
pub struct Any<T: ?Sized> {
    validators: Vec<Box<dyn Validator<T>>>,
}

impl<T: ?Sized> Any<T> {
    /// Create a new `Any` validator.
    #[must_use]
    pub fn new(validators: Vec<Box<dyn Validator<T>>>) -> Self {
        Self { validators }
    }
}

impl<T: ?Sized> Validator<T> for Any<T> {
    fn validate(&self, value: &T) -> Verdict {
        let mut last_failure = None;
        for validator in &self.validators {
            match validator.validate(value) {
                Verdict::Valid => return Verdict::Valid,
                failed => last_failure = Some(failed),
            }
        }
        last_failure.unwrap_or(Verdict::Valid)
    }
}

impl<T: ?Sized> fmt::Debug for Any<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Any")
            .field(
                "validators",
                &format!("[{} validators]", self.validators.len()),
            )
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Rules – fluent builder
// ---------------------------------------------------------------------------

/// A fluent builder collecting validators into an [`All`].
///
/// # Example
///
/// ```rust
/// use formkit_validate::{Rules, Validator};
///
/// let rules = Rules::new().not_empty().max(10, "too long").build();
/// assert!(rules.validate("hello").is_valid());
/// assert!(rules.validate("").is_invalid());
/// ```
pub struct Rules<T: ?Sized> {
    validators: Vec<Box<dyn Validator<T>>>,
}

impl<T: ?Sized> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Rules<T> {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Add a custom validator.
    #[must_use]
    pub fn rule(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Build the combined validator.
    #[must_use]
    pub fn build(self) -> All<T> {
        All::new(self.validators)
    }
}

impl Rules<str> {
    /// Require a non-empty value.
    #[must_use]
    pub fn not_empty(self) -> Self {
        self.rule(text::not_empty())
    }

    /// Require a well-formed email address.
    #[must_use]
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(text::email(message))
    }

    /// Require a formatted phone number.
    #[must_use]
    pub fn phone(self, message: impl Into<String>) -> Self {
        self.rule(text::phone(message))
    }

    /// Require a US ZIP code.
    #[must_use]
    pub fn zip(self, message: impl Into<String>) -> Self {
        self.rule(text::zip(message))
    }

    /// Require a decimal number.
    #[must_use]
    pub fn number(self, message: impl Into<String>) -> Self {
        self.rule(text::number(message))
    }

    /// Require exactly `count` digits.
    #[must_use]
    pub fn digits(self, count: usize, message: impl Into<String>) -> Self {
        self.rule(text::digits(count, message))
    }

    /// Require at least `n` characters after trimming.
    #[must_use]
    pub fn min(self, n: usize, message: impl Into<String>) -> Self {
        self.rule(text::min(n, message))
    }

    /// Require at most `n` characters after trimming.
    #[must_use]
    pub fn max(self, n: usize, message: impl Into<String>) -> Self {
        self.rule(text::max(n, message))
    }

    /// Require a personal-name character set.
    #[must_use]
    pub fn name(self, message: impl Into<String>) -> Self {
        self.rule(text::name(message))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
