//! Property-based invariant tests for the text rules.
//!
//! 1. `min(n)` and `max(n)` partition every value around its trimmed length.
//! 2. Whitespace padding never changes a trimmed rule's verdict.
//! 3. The parameterless and messaged emptiness pairs stay exact inverses.
//! 4. A full-class pattern accepts exactly the strings it describes.

use formkit_validate::{Validator, text};
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

proptest! {
    #[test]
    fn min_max_partition_on_trimmed_length(value in ".{0,24}", n in 0usize..16) {
        let len = value.trim().graphemes(true).count();
        prop_assert_eq!(text::min(n, "short").validate(&value).is_valid(), len >= n);
        prop_assert_eq!(text::max(n, "long").validate(&value).is_valid(), len <= n);
    }

    #[test]
    fn padding_does_not_change_trimmed_rules(value in "[a-z0-9@.]{0,16}") {
        let padded = format!("  {value}\t");
        for rule in [
            text::email("e"),
            text::number("n"),
            text::digits(4, "d"),
            text::name("m"),
        ] {
            prop_assert_eq!(
                rule.validate(&value).is_valid(),
                rule.validate(&padded).is_valid()
            );
        }
    }

    #[test]
    fn emptiness_pairs_are_inverses(value in ".{0,8}") {
        prop_assert_ne!(
            text::empty().validate(&value).is_valid(),
            text::not_empty().validate(&value).is_valid()
        );
        // The messaged pair is inverted in sense but still a partition.
        prop_assert_ne!(
            text::empty_with("m").validate(&value).is_valid(),
            text::not_empty_with("m").validate(&value).is_valid()
        );
        prop_assert_eq!(
            text::empty().validate(&value).is_valid(),
            text::not_empty_with("m").validate(&value).is_valid()
        );
    }

    #[test]
    fn digit_pattern_accepts_exactly_digit_strings(value in "[0-9]{1,12}") {
        let rule = text::pattern("[0-9]+", "digits only").unwrap();
        prop_assert!(rule.validate(&value).is_valid());
        let tainted = format!("{value}x");
        prop_assert!(rule.validate(&tainted).is_invalid());
    }
}
