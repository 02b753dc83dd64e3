pub(crate) mod auth_error;
pub(crate) mod backend_client;
pub(crate) mod submission_error;
pub(crate) mod upload_error;

pub use auth_error::{AuthError, AuthResult};
pub use backend_client::BackendClient;
pub use submission_error::{SubmissionError, SubmissionResult};
pub use upload_error::{UploadError, UploadResult};
