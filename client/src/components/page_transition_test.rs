use super::*;

#[test]
fn class_carries_direction() {
    assert_eq!(transition_class(Direction::Forward), "page-transition page-transition--forward");
    assert_eq!(transition_class(Direction::Back), "page-transition page-transition--back");
}
