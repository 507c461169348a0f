pub mod about;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
