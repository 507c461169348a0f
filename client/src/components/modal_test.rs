use super::*;

#[test]
fn only_escape_closes() {
    assert!(is_close_key("Escape"));
    assert!(!is_close_key("Enter"));
    assert!(!is_close_key("Esc"));
}
