use super::*;

#[test]
fn rejects_a_short_password_before_any_request() {
    assert_eq!(
        validate_signup_input("a@b.com", "", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn rejects_a_mismatched_confirmation() {
    assert_eq!(
        validate_signup_input("a@b.com", "", "longenough", "different0"),
        Err("Passwords do not match.")
    );
}

#[test]
fn requires_an_email() {
    assert_eq!(
        validate_signup_input("   ", "", "longenough", "longenough"),
        Err("Email is required.")
    );
}

#[test]
fn trims_the_email_and_omits_an_empty_name() {
    let input = validate_signup_input(" a@b.com ", "   ", "longenough", "longenough").unwrap();
    assert_eq!(input.email, "a@b.com");
    assert_eq!(input.full_name, None);
}

#[test]
fn trims_the_full_name_when_present() {
    let input = validate_signup_input("a@b.com", "  Alice  ", "longenough", "longenough").unwrap();
    assert_eq!(input.full_name, Some("Alice".to_owned()));
}
