//! End-to-end flows across mask, validation, field state, and storage.

use formkit::prelude::*;

#[test]
fn phone_entry_flow() {
    let mut phone = Field::new(text::phone("enter a full phone number"))
        .with_formatter(Mask::phone());

    // Partial input formats but does not validate yet.
    phone.set_value("5551234567");
    assert_eq!(phone.value(), "+5 (551)-234-567");
    assert!(!phone.is_valid());
    assert_eq!(phone.error_message(), "enter a full phone number");

    // A full number formats and validates.
    phone.set_value("15551234567");
    assert_eq!(phone.value(), "+1 (555)-123-4567");
    assert!(phone.is_valid());
    assert_eq!(phone.error_message(), "");
    assert_eq!(phone.unformatted_value(), "15551234567");
}

#[test]
fn growing_input_never_double_formats() {
    let mut phone = Field::new(text::any()).with_formatter(Mask::phone());

    let inputs = ["5", "55", "555", "5551", "55512"];
    for raw in inputs {
        phone.set_value(raw);
        // The stored digits are exactly the raw digits: formatting was
        // applied once, not compounded across writes.
        assert_eq!(phone.unformatted_value(), raw);
    }
}

#[test]
fn echoed_display_text_round_trips() {
    // Hosts bind the displayed text back into set_value on every change;
    // feeding the formatted value through again must be a no-op.
    let mut code = Field::new(text::any()).with_formatter(Mask::activation_code());
    code.set_value("abcd1234wxyz5678");
    let shown = code.value().to_string();
    assert!(!code.set_value(&shown));
    assert_eq!(code.value(), "abcd-1234-wxyz-5678");
}

#[test]
fn pin_entry_with_digit_rule() {
    let mut pin = Field::new(text::digits(6, "six digits required"))
        .with_formatter(Mask::verification_pin());

    pin.set_value("12 34 56 78");
    assert_eq!(pin.value(), "123456");
    assert!(pin.is_valid());

    pin.set_value("12");
    assert_eq!(pin.value(), "12");
    assert!(!pin.is_valid());
    assert_eq!(pin.error_message(), "six digits required");
}

#[test]
fn username_rules_compose() {
    let mut user = Field::new(
        Rules::new()
            .not_empty()
            .min(3, "at least 3 characters")
            .max(46, "at most 46 characters")
            .build(),
    )
    .with_formatter(Mask::user_name());

    user.set_value("ab");
    assert!(!user.is_valid());
    assert_eq!(user.error_message(), "at least 3 characters");

    user.set_value("a b c");
    // The mask strips spaces before validation sees the value.
    assert_eq!(user.value(), "abc");
    assert!(user.is_valid());
}

#[test]
fn stored_preference_seeds_a_field() {
    let mut store = MemoryStore::new();
    let saved_phone = Preference::new("profile.phone", String::new());
    saved_phone
        .set(&mut store, &"15551234567".to_string())
        .unwrap();

    let field = Field::new(text::phone("enter a full phone number"))
        .with_formatter(Mask::phone())
        .with_value(&saved_phone.get(&store));

    assert_eq!(field.value(), "+1 (555)-123-4567");
    assert!(field.is_valid());
}

#[test]
fn field_value_persists_through_a_store() {
    let mut field = Field::new(text::any()).with_formatter(Mask::phone());
    field.set_value("15551234567");

    let mut store = MemoryStore::new();
    let saved = Preference::new("profile.phone", String::new());
    saved
        .set(&mut store, &field.unformatted_value())
        .unwrap();

    // A later session reconstructs the same display text.
    let restored = Field::new(text::any())
        .with_formatter(Mask::phone())
        .with_value(&saved.get(&store));
    assert_eq!(restored.value(), field.value());
}
