use super::*;
use crate::net::types::ErrorDetail;

#[test]
fn string_detail_becomes_the_message() {
    let (message, detail) =
        derive_error_message(r#"{"detail":"Invalid credentials"}"#, "Unauthorized");
    assert_eq!(message, "Invalid credentials");
    assert_eq!(detail, Some(ErrorDetail::Message("Invalid credentials".to_owned())));
}

#[test]
fn field_errors_use_the_first_entry_in_order() {
    let body = r#"{"detail":[{"msg":"A","loc":["body","email"]},{"msg":"B"}]}"#;
    let (message, detail) = derive_error_message(body, "Unprocessable Entity");
    assert_eq!(message, "A");
    assert!(matches!(detail, Some(ErrorDetail::Fields(fields)) if fields.len() == 2));
}

#[test]
fn empty_field_error_list_falls_back_to_the_body() {
    let body = r#"{"detail":[]}"#;
    let (message, _) = derive_error_message(body, "Bad Request");
    assert_eq!(message, body);
}

#[test]
fn unparsable_body_is_shown_verbatim() {
    let (message, detail) = derive_error_message("oops", "Bad Request");
    assert_eq!(message, "oops");
    assert_eq!(detail, None);
}

#[test]
fn empty_body_falls_back_to_the_status_text() {
    let (message, _) = derive_error_message("", "Bad Request");
    assert_eq!(message, "Bad Request");
}

#[test]
fn from_response_displays_the_derived_message() {
    let err = ApiError::from_response(r#"{"detail":"Email already registered"}"#, "Bad Request");
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn transport_errors_use_the_fixed_text() {
    assert_eq!(ApiError::transport().to_string(), REQUEST_FAILED);
}

#[test]
fn require_body_rejects_an_empty_success_body() {
    assert_eq!(require_body(Some(7)), Ok(7));
    assert_eq!(require_body::<i32>(None), Err(ApiError::transport()));
}
