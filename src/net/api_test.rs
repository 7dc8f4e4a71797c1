use super::*;

#[test]
fn verify_email_endpoint_encodes_the_token() {
    assert_eq!(
        verify_email_endpoint("abc 123/+="),
        "/auth/verify-email?token=abc%20123%2F%2B%3D"
    );
}

#[test]
fn register_payload_omits_an_absent_full_name() {
    let payload = register_payload("a@b.com", "hunter22hunter", None);
    assert_eq!(
        payload,
        serde_json::json!({ "email": "a@b.com", "password": "hunter22hunter" })
    );
}

#[test]
fn register_payload_carries_the_full_name_when_present() {
    let payload = register_payload("a@b.com", "hunter22hunter", Some("Alice"));
    assert_eq!(payload["full_name"], "Alice");
}

#[test]
fn login_payload_carries_both_credentials() {
    assert_eq!(
        login_payload("a@b.com", "hunter22hunter"),
        serde_json::json!({ "email": "a@b.com", "password": "hunter22hunter" })
    );
}

#[test]
fn forgot_password_payload_is_just_the_email() {
    assert_eq!(
        forgot_password_payload("a@b.com"),
        serde_json::json!({ "email": "a@b.com" })
    );
}

#[test]
fn reset_password_payload_uses_the_wire_field_names() {
    assert_eq!(
        reset_password_payload("tok", "newpassword1"),
        serde_json::json!({ "token": "tok", "new_password": "newpassword1" })
    );
}
