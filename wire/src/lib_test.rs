use super::*;

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("http://api.test/", "/ready"), "http://api.test/ready");
    assert_eq!(endpoint_url("http://api.test", "auth/token"), "http://api.test/auth/token");
}

#[test]
fn endpoint_url_with_empty_base_is_root_relative() {
    assert_eq!(endpoint_url("", ME_PATH), "/auth/users/me");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}
