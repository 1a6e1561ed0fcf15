#![forbid(unsafe_code)]

//! The [`Mask`] template and its formatting algorithm.

use std::fmt;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Default character marking fill positions in a pattern.
pub const PLACEHOLDER: char = '#';

// ---------------------------------------------------------------------------
// MaskError
// ---------------------------------------------------------------------------

/// Construction error for a mask whose strip expression does not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskError {
    /// The expression that failed to compile.
    pub expression: String,
    /// Compiler diagnostic.
    pub message: String,
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid strip expression `{}`: {}",
            self.expression, self.message
        )
    }
}

impl std::error::Error for MaskError {}

// ---------------------------------------------------------------------------
// Mask
// ---------------------------------------------------------------------------

/// A literal pattern template with placeholder positions.
///
/// `#` (or a custom placeholder) marks positions filled from user input;
/// every other pattern character is a literal re-inserted verbatim. The
/// strip expression is a regular expression whose matches are deleted from
/// input before templating, and again by [`Mask::unformat`]. Author it to
/// match exactly the template literals.
///
/// # Example
///
/// ```rust
/// use formkit_mask::Mask;
///
/// let mask = Mask::phone();
/// assert_eq!(mask.format("15551234567"), "+1 (555)-123-4567");
/// assert_eq!(mask.unformat("+1 (555)-123-4567"), "15551234567");
/// ```
#[derive(Debug, Clone)]
pub struct Mask {
    pattern: String,
    placeholder: char,
    strip: Regex,
}

impl Mask {
    /// Create a mask from a pattern template and a strip expression.
    ///
    /// Fails fast on a malformed expression; formatting itself cannot fail.
    pub fn new(pattern: impl Into<String>, strip_expr: &str) -> Result<Self, MaskError> {
        let strip = Regex::new(strip_expr).map_err(|err| MaskError {
            expression: strip_expr.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            pattern: pattern.into(),
            placeholder: PLACEHOLDER,
            strip,
        })
    }

    fn preset(pattern: String, strip_expr: &str) -> Self {
        let strip = Regex::new(strip_expr).expect("preset strip expression compiles");
        Self {
            pattern,
            placeholder: PLACEHOLDER,
            strip,
        }
    }

    // --- Presets ---

    /// `+# (###)-###-####`, keeping digits only.
    #[must_use]
    pub fn phone() -> Self {
        Self::preset("+# (###)-###-####".to_string(), "[^0-9]")
    }

    /// `####-####-####-####`, keeping ASCII alphanumerics.
    #[must_use]
    pub fn activation_code() -> Self {
        Self::preset("####-####-####-####".to_string(), "[^a-zA-Z0-9]")
    }

    /// `######`, keeping digits, dots, commas, and hyphens.
    #[must_use]
    pub fn verification_pin() -> Self {
        Self::preset("######".to_string(), "[^0-9.,-]")
    }

    /// 46 placeholder slots, keeping the username character set.
    #[must_use]
    pub fn user_name() -> Self {
        Self::preset("#".repeat(46), r##"[^a-zA-Z0-9!"#$%&'()_.@]"##)
    }

    /// `count` placeholder slots, keeping digits, dots, commas, and hyphens.
    #[must_use]
    pub fn numbers(count: usize) -> Self {
        Self::preset("#".repeat(count), "[^0-9.,-]")
    }

    /// `limit` placeholder slots with the printable-ASCII strip expression.
    ///
    /// The strip expression matches the printable-ASCII set itself, so
    /// formatting removes those characters and only what falls outside the
    /// set counts against the limit.
    #[must_use]
    pub fn text(limit: usize) -> Self {
        Self::preset(
            "#".repeat(limit),
            r##"[a-zA-Z0-9!"#$%&'()*+,-./:;<=>?@\[\]^_`{|}~]+"##,
        )
    }

    // --- Builders ---

    /// Use a different placeholder character (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    // --- Accessors ---

    /// The pattern template.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The placeholder character.
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Number of placeholder slots in the pattern.
    pub fn capacity(&self) -> usize {
        self.pattern
            .chars()
            .filter(|&c| c == self.placeholder)
            .count()
    }

    // --- Formatting ---

    /// Apply the mask to `raw`.
    ///
    /// Strip matches are deleted first. The pattern is then walked left to
    /// right: a placeholder position consumes one input grapheme, a literal
    /// position inserts the literal and shifts the input right. The walk
    /// stops as soon as input runs out, so no trailing literals are
    /// appended, and the result is truncated to the pattern length.
    pub fn format(&self, raw: &str) -> String {
        let stripped = self.strip.replace_all(raw, "");
        let mut out: Vec<&str> = stripped.graphemes(true).collect();

        let mut placeholder_buf = [0u8; 4];
        let placeholder: &str = self.placeholder.encode_utf8(&mut placeholder_buf);
        let pattern_len = self.pattern.graphemes(true).count();

        for (index, part) in self.pattern.graphemes(true).enumerate() {
            if index >= out.len() {
                return out.concat();
            }
            if part != placeholder {
                out.insert(index, part);
            }
        }

        out.truncate(pattern_len);
        out.concat()
    }

    /// Delete strip-expression matches from `text`.
    pub fn unformat(&self, text: &str) -> String {
        self.strip.replace_all(text, "").into_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
