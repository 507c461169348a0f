use super::*;

#[test]
fn new_keys_move_forward() {
    let mut tracker = DirectionTracker::default();
    assert_eq!(tracker.observe("a"), Direction::Forward);
    assert_eq!(tracker.observe("b"), Direction::Forward);
    assert_eq!(tracker.depth(), 2);
}

#[test]
fn revisiting_an_earlier_key_is_back() {
    let mut tracker = DirectionTracker::default();
    for key in ["a", "b", "c"] {
        tracker.observe(key);
    }
    assert_eq!(tracker.observe("a"), Direction::Back);
    assert_eq!(tracker.depth(), 1);
    assert_eq!(tracker.observe("b"), Direction::Forward);
}

#[test]
fn same_key_is_not_back() {
    let mut tracker = DirectionTracker::default();
    tracker.observe("a");
    assert_eq!(tracker.observe("a"), Direction::Forward);
    assert_eq!(Direction::Back.class_suffix(), "back");
}
