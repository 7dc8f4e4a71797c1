use super::*;

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_new_password("short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_new_password("longenough", "different0"),
        Err("Passwords do not match.")
    );
}

#[test]
fn matching_long_password_passes() {
    assert_eq!(validate_new_password("longenough", "longenough"), Ok(()));
}

#[test]
fn length_is_counted_in_characters_not_bytes() {
    // 8 characters, 10 bytes.
    assert_eq!(validate_new_password("pässwörd", "pässwörd"), Ok(()));
}
