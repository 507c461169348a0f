use super::*;

#[test]
fn brand_points_at_dashboard_when_signed_in() {
    assert_eq!(brand_href(true), "/dashboard");
    assert_eq!(brand_href(false), "/");
}

#[test]
fn menu_class_reflects_state() {
    assert_eq!(menu_class(false), "navbar__menu");
    assert_eq!(menu_class(true), "navbar__menu navbar__menu--open");
}
