use super::*;

#[test]
fn endpoint_prefixes_relative_paths_with_the_base() {
    assert_eq!(endpoint("/auth/login"), format!("{}/auth/login", api_base()));
}

#[test]
fn endpoint_passes_absolute_urls_through() {
    assert_eq!(
        endpoint("https://auth.example.com/auth/me"),
        "https://auth.example.com/auth/me"
    );
}
