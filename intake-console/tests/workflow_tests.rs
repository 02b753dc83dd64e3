//! Integration tests for the session and submission workflows against a
//! wiremock backend

use intake_client::{AuthError, BackendClient, SubmissionError};
use intake_console::{SessionManager, StagedFile, submit_record, upload_file};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Echo the posted row back as a one-element representation
struct EchoRows;

impl Respond for EchoRows {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let row: Value = serde_json::from_slice(&request.body).unwrap();
        ResponseTemplate::new(201).set_body_json(json!([row]))
    }
}

fn accept_login(email: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": "jwt",
        "user": { "email": email, "user_metadata": {} }
    }))
}

// =========================================================================
// Session manager
// =========================================================================

#[tokio::test]
async fn test_login_promotes_the_session() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(accept_login("a@x.com"))
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let mut manager = SessionManager::new();

    assert!(!manager.session().is_authenticated());

    manager.login(&client, "a@x.com", "correct").await.unwrap();

    assert!(manager.session().is_authenticated());
    assert_eq!(manager.session().identity().unwrap().email, "a@x.com");
}

#[tokio::test]
async fn test_failed_login_leaves_the_session_anonymous() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_description": "Invalid login credentials"
        })))
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let mut manager = SessionManager::new();

    let err = manager
        .login(&client, "a@x.com", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Rejected { .. }));
    assert!(!manager.session().is_authenticated());
}

#[tokio::test]
async fn test_invalid_email_never_reaches_the_provider() {
    // No mocks mounted: a request would 404 and surface as Rejected, so an
    // Invalid error proves the input was stopped at validation.
    let mock_server = MockServer::start().await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let mut manager = SessionManager::new();

    let err = manager
        .login(&client, "not-an-email", "secret")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Invalid { .. }));
    assert!(!manager.session().is_authenticated());
}

#[tokio::test]
async fn test_signup_does_not_promote_the_session() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "new@x.com",
            "user_metadata": {}
        })))
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let manager = SessionManager::new();

    let identity = manager
        .signup(&client, "new@x.com", "secret")
        .await
        .unwrap();

    assert_eq!(identity.email, "new@x.com");
    // registration and first login are distinct events
    assert!(!manager.session().is_authenticated());
}

// =========================================================================
// Record submission
// =========================================================================

#[tokio::test]
async fn test_submit_record_inserts_one_row() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/records"))
        .respond_with(EchoRows)
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let record = submit_record(&client, "records").await.unwrap();

    assert_eq!(record.id.len(), 20);
    assert!(record.id.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_submit_record_surfaces_transport_failure() {
    // Nothing listens here; no retry happens and no success is reported
    let client = BackendClient::new("http://127.0.0.1:9", "test-key");

    let err = submit_record(&client, "records").await.unwrap_err();

    assert!(matches!(err, SubmissionError::Transport { .. }));
}

#[tokio::test]
async fn test_submit_record_rejects_absent_acknowledgment() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/records"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let err = submit_record(&client, "records").await.unwrap_err();

    assert!(matches!(err, SubmissionError::Malformed { .. }));
}

// =========================================================================
// File upload staging
// =========================================================================

#[test]
fn test_staged_copy_is_removed_on_drop() {
    let staged = StagedFile::write("notes.txt", b"hello").unwrap();
    let path = staged.path();

    assert!(path.exists());
    assert_eq!(std::fs::read(&path).unwrap(), b"hello");

    drop(staged);

    assert!(!path.exists());
}

#[test]
fn test_staging_strips_directories_from_the_name() {
    let staged = StagedFile::write("../../etc/passwd", b"x").unwrap();

    assert_eq!(staged.path().file_name().unwrap(), "passwd");
}

#[tokio::test]
async fn test_upload_file_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/storage/v1/object/uploads/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Key": "uploads/notes.txt"
        })))
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let result = upload_file(&client, "uploads", "notes.txt", b"hello").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_upload_file_failure_is_surfaced() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/storage/v1/object/uploads/notes.txt"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "internal error"
        })))
        .mount(&mock_server)
        .await;

    let client = BackendClient::new(&mock_server.uri(), "test-key");
    let result = upload_file(&client, "uploads", "notes.txt", b"hello").await;

    assert!(result.is_err());
}
