use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, LoginRequest};
use validator::Validate;

#[test]
fn test_status_codes_map_to_kinds() {
    for (status, kind) in [
        (400, AppErrorKind::BadRequest),
        (401, AppErrorKind::Unauthorized),
        (403, AppErrorKind::Forbidden),
        (404, AppErrorKind::NotFound),
        (422, AppErrorKind::ValidationError),
        (503, AppErrorKind::InternalError),
    ] {
        let err = AppError::from_status(status, "");
        assert_eq!(err.kind, kind, "{status}");
    }
}

#[test]
fn test_error_body_keeps_message_and_field_errors() {
    let body = r#"{"kind":"ValidationError","message":"Check your input","field_errors":{"email":"already registered"}}"#;
    let err = AppError::from_status(422, body);
    assert_eq!(err.friendly_message(), "Check your input");
    assert_eq!(
        err.field_errors.get("email").map(String::as_str),
        Some("already registered")
    );
}

#[test]
fn test_network_errors_get_a_friendly_message() {
    let err = AppError::network("dns error: no such host");
    assert!(err.friendly_message().starts_with("Unable to reach the server"));
}

#[test]
fn test_login_validation_reports_each_field() {
    let request = LoginRequest {
        email: "not-an-email".to_string(),
        password: "short".to_string(),
    };
    let err = AppError::from(request.validate().unwrap_err());

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("email").map(String::as_str),
        Some("Valid email is required")
    );
    assert_eq!(
        err.field_errors.get("password").map(String::as_str),
        Some("Password must be at least 8 characters")
    );
}
