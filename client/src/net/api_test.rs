use super::*;

#[test]
fn log_lines_name_method_path_and_auth() {
    assert_eq!(request_log_line(Verb::Get, "/auth/users/me", true), "[api] -> GET /auth/users/me (bearer)");
    assert_eq!(request_log_line(Verb::Post, "/auth/token", false), "[api] -> POST /auth/token (anonymous)");
    assert_eq!(response_log_line(Verb::Get, "/ready", 503), "[api] <- GET /ready 503");
}

#[test]
fn auth_header_only_with_a_token() {
    assert_eq!(auth_header(Some("abc")).as_deref(), Some("Bearer abc"));
    assert_eq!(auth_header(Some("")), None);
    assert_eq!(auth_header(None), None);
}

#[test]
fn non_2xx_becomes_status_error() {
    assert_eq!(check_status(204, String::new()).unwrap(), "");
    let err = check_status(401, r#"{"detail":"Not authenticated"}"#.to_owned()).unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.detail().as_deref(), Some("Not authenticated"));
}

#[test]
fn decode_reports_bad_json() {
    let user: User = decode(r#"{"id":3,"email":"a@b.co","first_name":null,"is_active":true}"#).unwrap();
    assert_eq!(user.id, "3");
    assert!(matches!(decode::<TokenResponse>("{}"), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    let err = unavailable::<()>().unwrap_err();
    assert_eq!(err.failure(), wire::Failure::ServerError);
}
