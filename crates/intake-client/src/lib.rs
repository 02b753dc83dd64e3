//! HTTP client for the hosted backend.
//!
//! One client, three surfaces: the identity provider (`/auth/v1`), the table
//! store (`/rest/v1`), and the blob store (`/storage/v1`). Every response is
//! positively checked; success is never inferred from the absence of a
//! transport error.

pub(crate) mod client;

pub use client::{
    AuthError, AuthResult, BackendClient, SubmissionError, SubmissionResult, UploadError,
    UploadResult,
};
