use super::*;

#[test]
fn input_and_blur_route_to_the_right_field() {
    let mut form = SignupForm::new();
    apply_input(&mut form, Field::LastName, " hopper ");
    assert!(apply_blur(&mut form, Field::LastName));
    assert_eq!(form.value(Field::LastName), "HOPPER");

    apply_input(&mut form, Field::Email, "not-an-email");
    assert!(!apply_blur(&mut form, Field::Email));
    assert_eq!(form.active_error().map(|e| e.message), Some(MessageKey::SignupEmailInvalid));
}

#[test]
fn only_marked_fields_are_invalid() {
    let mut form = SignupForm::new();
    form.set_email("a@b.co");
    form.set_confirm_email("x@b.co");
    form.blur_confirm_email();
    let active = form.active_error();
    assert_eq!(input_class(active, Field::Email), "auth-form__input auth-form__input--invalid");
    assert_eq!(input_class(active, Field::ConfirmEmail), "auth-form__input auth-form__input--invalid");
    assert_eq!(input_class(active, Field::Password), "auth-form__input");
    assert_eq!(input_class(None, Field::Email), "auth-form__input");
}

#[test]
fn password_fields_reveal_as_text() {
    assert_eq!(input_type(Field::Password, false), "password");
    assert_eq!(input_type(Field::ConfirmPassword, true), "text");
    assert_eq!(input_type(Field::ConfirmEmail, true), "email");
    assert_eq!(input_type(Field::FirstName, false), "text");
}

#[test]
fn every_field_has_a_placeholder() {
    for field in FIELDS {
        assert!(placeholder(*field).id().starts_with("signup."));
    }
}
