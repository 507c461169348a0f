use super::*;

#[test]
fn meta_tag_wins() {
    assert_eq!(
        resolve_api_base_url(Some("https://api.stakr.app/"), Some("http://build:9000")),
        "https://api.stakr.app"
    );
}

#[test]
fn blank_meta_falls_through_to_compiled_value() {
    assert_eq!(resolve_api_base_url(Some("  "), Some("http://build:9000")), "http://build:9000");
}

#[test]
fn default_is_local_backend() {
    assert_eq!(resolve_api_base_url(None, None), DEFAULT_API_URL);
}
