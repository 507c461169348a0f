use super::*;
use crate::locale::Locale;

#[test]
fn submit_needs_both_fields_and_valid_email() {
    assert!(!LoginInput::default().can_submit());
    assert!(!LoginInput::new("ada@example.com", "").can_submit());
    assert!(!LoginInput::new("ada@example", "pw").can_submit());
    assert!(LoginInput::new(" ada@example.com ", "pw").can_submit());
}

#[test]
fn validate_normalizes_email() {
    let form = LoginInput::new("  Ada@Example.com ", "secret").validate().unwrap();
    assert_eq!(form, LoginForm::new("ada@example.com", "secret"));
}

#[test]
fn validate_reports_first_problem() {
    assert_eq!(LoginInput::new("nope", "").validate(), Err(MessageKey::LoginEmailInvalid));
    assert_eq!(LoginInput::new("a@b.co", "").validate(), Err(MessageKey::LoginPasswordRequired));
}

#[test]
fn failure_banners() {
    let starting = ApiError::from_response(503, "{}");
    assert_eq!(failure_notice(&starting), Notice::Key(MessageKey::LoginErrorServerStarting));

    let broken = ApiError::from_response(502, "bad gateway");
    assert_eq!(failure_notice(&broken), Notice::Key(MessageKey::LoginErrorServerError));

    let offline = ApiError::Transport("offline".into());
    assert_eq!(failure_notice(&offline), Notice::Key(MessageKey::LoginErrorServerError));

    let rejected = ApiError::from_response(401, r#"{"detail":"Incorrect email or password"}"#);
    assert_eq!(failure_notice(&rejected).render(Locale::Fr), "Incorrect email or password");

    let bare = ApiError::from_response(401, "");
    assert_eq!(failure_notice(&bare), Notice::Key(MessageKey::LoginErrorIncorrectCredentials));
}
