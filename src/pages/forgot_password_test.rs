use super::*;

#[test]
fn trims_the_email() {
    assert_eq!(
        validate_forgot_input("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
}

#[test]
fn requires_an_email() {
    assert_eq!(validate_forgot_input("   "), Err("Email is required."));
}
