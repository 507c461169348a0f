//! Login and signup form state, validation, and error mapping.

pub mod login;
pub mod signup;
pub mod validate;

pub use login::LoginInput;
pub use signup::{ActiveError, ErrorSlot, Field, SignupForm};
