use serde_json::json;

use super::*;

#[test]
fn service_unavailable_is_server_starting() {
    let err = ApiError::from_response(503, r#"{"detail":"Service not ready"}"#);
    assert_eq!(err.failure(), Failure::ServerStarting);
}

#[test]
fn other_5xx_is_server_error() {
    let err = ApiError::from_response(500, "Internal Server Error");
    assert_eq!(err.failure(), Failure::ServerError);
    assert_eq!(err.backend_message(), None);
}

#[test]
fn transport_failure_is_server_error() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.failure(), Failure::ServerError);
    assert_eq!(err.status(), None);
}

#[test]
fn client_error_carries_string_detail() {
    let err = ApiError::from_response(401, r#"{"detail":"Incorrect email or password"}"#);
    assert_eq!(
        err.failure(),
        Failure::Rejected { status: 401, detail: Some("Incorrect email or password".to_owned()) }
    );
}

#[test]
fn client_error_without_string_detail_has_none() {
    let err = ApiError::from_response(422, r#"{"detail":[{"loc":["body","email"]}]}"#);
    assert_eq!(err.failure(), Failure::Rejected { status: 422, detail: None });
}

#[test]
fn format_prefers_detail_then_message_then_error() {
    let body = json!({"message": "second", "error": "third"});
    assert_eq!(format_backend_error(Some(400), Some(&body)), Some("400 - second".to_owned()));

    let body = json!({"error": "third"});
    assert_eq!(format_backend_error(None, Some(&body)), Some("third".to_owned()));
}

#[test]
fn format_renders_non_string_detail_as_body_json() {
    let body = json!({"detail": [1, 2]});
    assert_eq!(format_backend_error(Some(422), Some(&body)), Some(r#"422 - {"detail":[1,2]}"#.to_owned()));
}

#[test]
fn format_percent_decodes_only_when_escaped() {
    let body = json!({"detail": "Email%20d%C3%A9j%C3%A0%20utilis%C3%A9"});
    assert_eq!(format_backend_error(None, Some(&body)), Some("Email déjà utilisé".to_owned()));

    let body = json!({"detail": "100% sure"});
    assert_eq!(format_backend_error(None, Some(&body)), Some("100% sure".to_owned()));
}

#[test]
fn format_repairs_latin1_mojibake() {
    let body = json!({"detail": "PrÃ©nom invalide"});
    assert_eq!(format_backend_error(None, Some(&body)), Some("Prénom invalide".to_owned()));
}

#[test]
fn format_without_object_body_is_none() {
    assert_eq!(format_backend_error(Some(500), None), None);
    assert_eq!(format_backend_error(Some(500), Some(&json!("plain"))), None);
}
