use crate::client::{
    AuthError, AuthResult, SubmissionError, SubmissionResult, UploadError, UploadResult,
};

use intake_core::{Identity, Record};

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Postgres unique-violation code, as surfaced by the table store
const UNIQUE_VIOLATION: &str = "23505";

/// HTTP client for the hosted backend's three surfaces
pub struct BackendClient {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl BackendClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "https://abc.supabase.co")
    /// * `api_key` - Access key, sent as `apikey` header and bearer token
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with the access key headers attached
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    // =========================================================================
    // Identity provider
    // =========================================================================

    /// Exchange credentials for an authenticated identity
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthResult<Identity> {
        self.credential_post("/auth/v1/token?grant_type=password", email, password)
            .await
    }

    /// Register a new user. Returns the registered identity; the caller
    /// decides whether that also authenticates the session.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<Identity> {
        self.credential_post("/auth/v1/signup", email, password).await
    }

    /// POST a credential pair and positively decode the returned identity
    async fn credential_post(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<Identity> {
        #[derive(Serialize)]
        struct Credentials<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, path)
            .json(&Credentials { email, password });

        let response = req.send().await?;
        let status = response.status();
        let body = parse_body(response.text().await?);

        if !status.is_success() {
            return Err(AuthError::rejected(error_message(&body, status)));
        }

        identity_from(&body)
            .ok_or_else(|| AuthError::malformed("response is missing the user email"))
    }

    // =========================================================================
    // Table store
    // =========================================================================

    /// Insert one row and positively check the store's acknowledgment.
    ///
    /// Success requires a 2xx response whose representation echoes the
    /// inserted row's id. Anything else is a failure, including an absent or
    /// malformed acknowledgment. A uniqueness violation on `id` is reported
    /// distinctly.
    pub async fn insert_row(&self, table: &str, record: &Record) -> SubmissionResult<()> {
        let req = self
            .request(Method::POST, &format!("/rest/v1/{table}"))
            .header("Prefer", "return=representation")
            .json(record);

        let response = req.send().await?;
        let status = response.status();
        let body = parse_body(response.text().await?);

        if !status.is_success() {
            let message = error_message(&body, status);
            if body.get("code").and_then(Value::as_str) == Some(UNIQUE_VIOLATION) {
                return Err(SubmissionError::constraint(
                    UNIQUE_VIOLATION.to_string(),
                    message,
                ));
            }
            return Err(SubmissionError::rejected(status.as_u16(), message));
        }

        let acknowledged = body
            .as_array()
            .and_then(|rows| rows.first())
            .and_then(|row| row.get("id"))
            .and_then(Value::as_str)
            .is_some_and(|id| id == record.id);

        if !acknowledged {
            return Err(SubmissionError::malformed(
                "acknowledgment does not echo the inserted row",
            ));
        }

        Ok(())
    }

    // =========================================================================
    // Blob store
    // =========================================================================

    /// Upload bytes under `name`; success requires the store to acknowledge
    /// the stored key
    pub async fn upload_object(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
    ) -> UploadResult<()> {
        let req = self
            .request(Method::POST, &format!("/storage/v1/object/{bucket}/{name}"))
            .header("Content-Type", "application/octet-stream")
            .body(bytes);

        let response = req.send().await?;
        let status = response.status();
        let body = parse_body(response.text().await?);

        if !status.is_success() {
            return Err(UploadError::rejected(
                status.as_u16(),
                error_message(&body, status),
            ));
        }

        let acknowledged = body
            .get("Key")
            .or_else(|| body.get("key"))
            .and_then(Value::as_str)
            .is_some();

        if !acknowledged {
            return Err(UploadError::malformed(
                "response is missing the stored key",
            ));
        }

        Ok(())
    }
}

/// Body text as JSON; non-JSON bodies decode to Null so every downstream
/// check fails closed
fn parse_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::Null)
}

/// Best-effort human message from a provider/store error body
fn error_message(body: &Value, status: StatusCode) -> String {
    for key in ["error_description", "msg", "message"] {
        if let Some(message) = body.get(key).and_then(Value::as_str) {
            return message.to_string();
        }
    }
    format!("status {status}")
}

/// Decode an identity from an auth response. The provider wraps the user in
/// a `user` object on sign-in and returns it bare on sign-up; both shapes
/// must carry a non-empty email.
fn identity_from(body: &Value) -> Option<Identity> {
    let user = match body.get("user") {
        Some(user) if user.is_object() => user,
        _ => body,
    };

    let email = user.get("email").and_then(Value::as_str)?;
    if email.is_empty() {
        return None;
    }

    let metadata = user
        .get("user_metadata")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    Some(Identity::with_metadata(email.to_string(), metadata))
}
