//! Property tests for the mask formatting algorithm.
//!
//! The load-bearing invariant is the unformat round-trip: formatting never
//! invents or reorders content, it only deletes strip matches, inserts
//! template literals, and truncates. Naive idempotence of `format` is not
//! an invariant and is deliberately not asserted.

use formkit_mask::Mask;
use proptest::prelude::*;

fn presets() -> Vec<Mask> {
    vec![
        Mask::phone(),
        Mask::activation_code(),
        Mask::verification_pin(),
        Mask::user_name(),
        Mask::numbers(5),
        Mask::text(12),
    ]
}

proptest! {
    /// Output length never exceeds the pattern length, for any input.
    #[test]
    fn output_never_exceeds_pattern(input in ".{0,64}") {
        for mask in presets() {
            let formatted = mask.format(&input);
            prop_assert!(
                formatted.chars().count() <= mask.pattern().chars().count(),
                "{formatted:?} longer than pattern {:?}",
                mask.pattern()
            );
        }
    }

    /// `unformat(format(x))` is the strip-filtered input, truncated to the
    /// mask's placeholder capacity.
    #[test]
    fn unformat_round_trips_filtered_input(input in "[0-9a-zA-Z +().,-]{0,40}") {
        for mask in [Mask::phone(), Mask::activation_code(), Mask::verification_pin()] {
            let filtered = mask.unformat(&input);
            let recovered = mask.unformat(&mask.format(&input));
            let expected: String = filtered.chars().take(mask.capacity()).collect();
            prop_assert_eq!(recovered, expected);
        }
    }

    /// When the filtered input fits the placeholder capacity, the round
    /// trip recovers it exactly.
    #[test]
    fn unformat_is_exact_within_capacity(digits in "[0-9]{0,11}") {
        let mask = Mask::phone();
        prop_assert_eq!(mask.unformat(&mask.format(&digits)), digits);
    }

    /// Formatting is a pure function: same input, same output.
    #[test]
    fn format_is_deterministic(input in ".{0,32}") {
        let mask = Mask::phone();
        prop_assert_eq!(mask.format(&input), mask.format(&input));
    }
}
