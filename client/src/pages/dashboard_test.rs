use super::*;

#[test]
fn greeting_joins_word_and_name() {
    assert_eq!(greeting_line("Salut", "Ada"), "Salut, Ada");
}

#[test]
fn status_follows_active_flag() {
    assert_eq!(status_key(true), MessageKey::DashboardAccountActive);
    assert_eq!(status_key(false), MessageKey::DashboardAccountInactive);
}
