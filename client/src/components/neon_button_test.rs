use super::*;

#[test]
fn class_reflects_variant_and_width() {
    assert_eq!(button_class(Variant::Primary, false), "neon-button neon-button--primary");
    assert_eq!(button_class(Variant::Ghost, true), "neon-button neon-button--ghost neon-button--block");
}
