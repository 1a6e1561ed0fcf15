#![forbid(unsafe_code)]

//! The [`Field`] processor.

use std::fmt;

use formkit_mask::Formatter;
use formkit_validate::Validator;

/// State for one logical text field.
///
/// A `Field` owns the current formatted value and the flags derived from
/// it. [`Field::set_value`] is the single mutation entry point: it runs the
/// optional formatter, re-validates the stored value, and updates
/// `is_valid`, `error_message`, and `is_empty` in the same pass, so all
/// three always reflect the same evaluation.
///
/// A fresh field reports `is_valid() == false` and an empty error message
/// until the first write; the validator is not consulted for the initial
/// empty state.
///
/// `Field` does no locking of its own. Mutating one instance from several
/// threads is unsupported; the host event loop is expected to deliver
/// input callbacks on a single thread.
///
/// # Example
///
/// ```rust
/// use formkit_field::Field;
/// use formkit_mask::Mask;
/// use formkit_validate::text;
///
/// let mut phone = Field::new(text::phone("enter a full phone number"))
///     .with_formatter(Mask::phone());
///
/// phone.set_value("15551234567");
/// assert_eq!(phone.value(), "+1 (555)-123-4567");
/// assert!(phone.is_valid());
/// assert_eq!(phone.unformatted_value(), "15551234567");
/// ```
pub struct Field {
    validator: Box<dyn Validator<str>>,
    formatter: Option<Box<dyn Formatter>>,
    value: String,
    valid: bool,
    error: String,
    empty: bool,
}

impl Field {
    /// Create a field with the given validator and no formatter.
    pub fn new(validator: impl Validator<str> + 'static) -> Self {
        Self {
            validator: Box::new(validator),
            formatter: None,
            value: String::new(),
            valid: false,
            error: String::new(),
            empty: true,
        }
    }

    // --- Builder methods ---

    /// Attach a formatter (builder).
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Seed the field through the normal write path (builder).
    ///
    /// An empty initial value leaves the fresh state untouched, so the
    /// field still reports invalid-and-empty until the first real write.
    #[must_use]
    pub fn with_value(mut self, initial: &str) -> Self {
        if !initial.is_empty() {
            self.set_value(initial);
        }
        self
    }

    // --- Mutation ---

    /// Store a new raw value.
    ///
    /// When a formatter is configured and its output differs from `raw`,
    /// the formatted form is stored; otherwise `raw` is stored as is. The
    /// validator then runs against the stored value. Returns `true` if the
    /// stored value changed.
    pub fn set_value(&mut self, raw: &str) -> bool {
        let next = match &self.formatter {
            Some(formatter) => {
                let formatted = formatter.format(raw);
                if formatted != raw {
                    formatted
                } else {
                    raw.to_string()
                }
            }
            None => raw.to_string(),
        };

        let changed = next != self.value;
        self.value = next;

        let verdict = self.validator.validate(&self.value);
        self.valid = verdict.is_valid();
        self.error = verdict.message().unwrap_or("").to_string();
        self.empty = self.value.is_empty();
        log_write(self.value.len(), self.valid, changed);
        changed
    }

    // --- Accessors ---

    /// The current formatted value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The stored value with formatting characters stripped back out.
    ///
    /// Identity when no formatter is configured.
    pub fn unformatted_value(&self) -> String {
        match &self.formatter {
            Some(formatter) => formatter.unformat(&self.value),
            None => self.value.clone(),
        }
    }

    /// Whether the last evaluation passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The failure message from the last evaluation, or `""`.
    pub fn error_message(&self) -> &str {
        &self.error
    }

    /// Whether the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .field("valid", &self.valid)
            .field("error", &self.error)
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "tracing")]
fn log_write(len: usize, valid: bool, changed: bool) {
    tracing::debug!(len, valid, changed, "field value written");
}

#[cfg(not(feature = "tracing"))]
fn log_write(_len: usize, _valid: bool, _changed: bool) {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
