use super::*;

#[test]
fn login_form_encodes_username_and_password() {
    let form = LoginForm::new("a@b.com", "p&ss word");
    assert_eq!(form.encode().expect("encode"), "username=a%40b.com&password=p%26ss+word");
}

#[test]
fn register_request_serializes_missing_job_title_as_null() {
    let req = RegisterRequest {
        first_name: "Ada".to_owned(),
        last_name: "LOVELACE".to_owned(),
        job_title: None,
        email: "ada@example.com".to_owned(),
        password: "longenough".to_owned(),
    };
    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(json["job_title"], serde_json::Value::Null);
    assert_eq!(json["email"], "ada@example.com");
}

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 42,
        "email": "ada@example.com",
        "first_name": "Ada",
        "is_active": true
    }))
    .expect("user");
    assert_eq!(user.id, "42");
}

#[test]
fn user_accepts_uuid_id_and_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "0b5c0f5e-7d1f-4b53-8f6b-3d6a3a4b8c11",
        "email": "ada@example.com"
    }))
    .expect("user");
    assert_eq!(user.id, "0b5c0f5e-7d1f-4b53-8f6b-3d6a3a4b8c11");
    assert_eq!(user.first_name, None);
    assert!(user.is_active);
}

#[test]
fn user_rejects_object_id() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": {"nested": 1},
        "email": "ada@example.com"
    }));
    assert!(result.is_err());
}

#[test]
fn display_name_prefers_first_name() {
    let user = User {
        id: "1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: Some("Ada".to_owned()),
        is_active: true,
    };
    assert_eq!(user.display_name(), "Ada");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let user = User {
        id: "1".to_owned(),
        email: "ada.l@example.com".to_owned(),
        first_name: Some("   ".to_owned()),
        is_active: true,
    };
    assert_eq!(user.display_name(), "ada.l");
}

#[test]
fn token_response_ignores_missing_token_type() {
    let token: TokenResponse =
        serde_json::from_str(r#"{"access_token":"t-1"}"#).expect("token");
    assert_eq!(token.access_token, "t-1");
    assert_eq!(token.token_type, None);
}
