#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reduced_motion_is_off_outside_the_browser() {
    assert!(!prefers_reduced_motion());
}

#[test]
fn document_helpers_are_callable_without_a_window() {
    set_document_lang("fr");
    history_back();
}
