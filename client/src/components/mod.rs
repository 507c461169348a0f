pub mod footer;
pub mod language_toggle;
pub mod modal;
pub mod navbar;
pub mod neon_button;
pub mod page_transition;
pub mod server_waking_up;
pub mod toast;
