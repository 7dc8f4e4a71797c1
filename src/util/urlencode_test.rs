use super::*;

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(encode_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
}

#[test]
fn reserved_characters_are_escaped() {
    assert_eq!(encode_component("/profile?tab=a&b"), "%2Fprofile%3Ftab%3Da%26b");
}

#[test]
fn spaces_and_plus_are_escaped() {
    assert_eq!(encode_component("a b+c"), "a%20b%2Bc");
}

#[test]
fn multibyte_characters_escape_each_utf8_byte() {
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(encode_component(""), "");
}
