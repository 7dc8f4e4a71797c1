use super::*;

#[test]
fn missing_token_is_a_local_error() {
    assert_eq!(token_from_query(None), Err(MISSING_TOKEN_MESSAGE));
}

#[test]
fn empty_token_is_a_local_error() {
    assert_eq!(token_from_query(Some(String::new())), Err(MISSING_TOKEN_MESSAGE));
}

#[test]
fn present_token_is_returned() {
    assert_eq!(token_from_query(Some("tok".to_owned())), Ok("tok".to_owned()));
}
