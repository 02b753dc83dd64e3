//! Credential input checks, applied before anything reaches the provider.

use crate::{CoreError, Result};

/// Validate a credential pair: well-formed email, non-empty password.
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    validate_email(email)?;

    if password.is_empty() {
        return Err(CoreError::validation("password must not be empty"));
    }

    Ok(())
}

/// Validate email shape: non-empty, no whitespace, a single `@` with
/// non-empty local and domain parts. Deliverability is the provider's
/// problem, not ours.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(CoreError::validation("email must not be empty"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(CoreError::validation(format!(
            "email must not contain whitespace: {email:?}"
        )));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(CoreError::validation(format!(
            "email is missing '@': {email:?}"
        )));
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(CoreError::validation(format!(
            "email is malformed: {email:?}"
        )));
    }

    Ok(())
}
