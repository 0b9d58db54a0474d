mod common;

use gradebook_auth::domain::models::config::ApiConfig;
use gradebook_auth::{RegisterRequest, RegistrationError, RegistrationRole, RegistrationService};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::transport_for;

fn student_request() -> RegisterRequest {
    RegisterRequest {
        username: "alice".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
        real_name: Some("Alice".to_string()),
        student_no: Some("S2024001".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_register_student() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/student"))
        .and(body_partial_json(json!({
            "username": "alice",
            "confirmPassword": "secret",
            "realName": "Alice",
            "studentNo": "S2024001"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "操作成功",
            "data": "注册成功"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = RegistrationService::new(transport_for(&mock_server), &ApiConfig::default());
    let outcome = service.register_student(&student_request()).await.unwrap();

    assert_eq!(outcome.role, RegistrationRole::Student);
    assert_eq!(outcome.message, "注册成功");
}

#[tokio::test]
async fn test_duplicate_student_number_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/student"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 400, "msg": "学号已存在"})),
        )
        .mount(&mock_server)
        .await;

    let service = RegistrationService::new(transport_for(&mock_server), &ApiConfig::default());
    let err = service.register_student(&student_request()).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Rejected(ref msg) if msg == "学号已存在"));
}

#[tokio::test]
async fn test_missing_student_number_never_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = RegistrationService::new(transport_for(&mock_server), &ApiConfig::default());
    let request = RegisterRequest {
        student_no: None,
        ..student_request()
    };
    let err = service.register_student(&request).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Invalid(ref reason) if reason == "student number is required"));
}

#[tokio::test]
async fn test_server_error_status_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/teacher"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let service = RegistrationService::new(transport_for(&mock_server), &ApiConfig::default());
    let request = RegisterRequest {
        student_no: None,
        teacher_no: Some("T-9".to_string()),
        ..student_request()
    };
    let err = service.register_teacher(&request).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Transport(_)));
}
