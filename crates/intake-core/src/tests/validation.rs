use crate::{validate_credentials, validate_email};

#[test]
fn test_valid_credentials_pass() {
    assert!(validate_credentials("a@x.com", "correct").is_ok());
}

#[test]
fn test_empty_email_rejected() {
    assert!(validate_credentials("", "correct").is_err());
}

#[test]
fn test_empty_password_rejected() {
    assert!(validate_credentials("a@x.com", "").is_err());
}

#[test]
fn test_email_without_at_rejected() {
    assert!(validate_email("ax.com").is_err());
}

#[test]
fn test_email_with_empty_parts_rejected() {
    assert!(validate_email("@x.com").is_err());
    assert!(validate_email("a@").is_err());
}

#[test]
fn test_email_with_whitespace_rejected() {
    assert!(validate_email("a @x.com").is_err());
}

#[test]
fn test_email_with_two_ats_rejected() {
    assert!(validate_email("a@b@x.com").is_err());
}
