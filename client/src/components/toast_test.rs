use super::*;

#[test]
fn reduced_motion_skips_exit_animation() {
    assert_eq!(exit_delay(true), Duration::ZERO);
    assert_eq!(exit_delay(false), Duration::from_millis(420));
    assert_eq!(TOAST_DURATION, Duration::from_millis(3200));
}

#[test]
fn leaving_phase_adds_modifier() {
    assert_eq!(toast_class(Phase::Visible), "toast");
    assert_eq!(toast_class(Phase::Leaving), "toast toast--leaving");
}
