use super::*;

#[test]
fn validate_login_input_trims_the_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter22hunter"),
        Ok(("user@example.com".to_owned(), "hunter22hunter".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_an_email() {
    assert_eq!(
        validate_login_input("   ", "hunter22hunter"),
        Err("Email and password are required.")
    );
}

#[test]
fn validate_login_input_requires_a_password() {
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Email and password are required.")
    );
}

#[test]
fn redirect_destination_defaults_to_the_root() {
    assert_eq!(redirect_destination(None), "/");
    assert_eq!(redirect_destination(Some(String::new())), "/");
}

#[test]
fn redirect_destination_uses_the_requested_path() {
    assert_eq!(redirect_destination(Some("/profile".to_owned())), "/profile");
}
