use super::*;

#[test]
fn missing_token_is_an_immediate_local_error() {
    assert_eq!(
        validate_reset_input("", "longenough", "longenough"),
        Err(MISSING_TOKEN_MESSAGE)
    );
}

#[test]
fn rejects_a_short_password() {
    assert_eq!(
        validate_reset_input("tok", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn rejects_a_mismatched_confirmation() {
    assert_eq!(
        validate_reset_input("tok", "longenough", "different0"),
        Err("Passwords do not match.")
    );
}

#[test]
fn valid_input_passes() {
    assert_eq!(validate_reset_input("tok", "longenough", "longenough"), Ok(()));
}
