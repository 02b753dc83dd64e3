//! Staged file upload to the blob store.

use intake_client::{BackendClient, UploadError, UploadResult};

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use log::debug;
use tempfile::TempDir;

/// Bytes staged in a scoped temporary directory before transmission.
///
/// Dropping the stage removes the directory and the copy inside it, on every
/// exit path - success, upload failure, or panic.
pub struct StagedFile {
    dir: TempDir,
    file_name: OsString,
}

impl StagedFile {
    /// Stage `bytes` under the base name of `name` in a fresh temp directory
    pub fn write(name: &str, bytes: &[u8]) -> UploadResult<Self> {
        let dir = tempfile::tempdir().map_err(|e| UploadError::io(PathBuf::from(name), e))?;

        let file_name: OsString = std::path::Path::new(name)
            .file_name()
            .unwrap_or_else(|| OsStr::new("upload"))
            .to_os_string();

        let path = dir.path().join(&file_name);
        std::fs::write(&path, bytes).map_err(|e| UploadError::io(path.clone(), e))?;

        Ok(Self { dir, file_name })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(&self.file_name)
    }

    /// Read the staged copy back for transmission
    pub fn contents(&self) -> UploadResult<Vec<u8>> {
        let path = self.path();
        std::fs::read(&path).map_err(|e| UploadError::io(path, e))
    }
}

/// Stage `bytes` locally, forward them to the blob store under `name`, and
/// remove the staged copy whether or not the upload succeeds.
pub async fn upload_file(
    client: &BackendClient,
    bucket: &str,
    name: &str,
    bytes: &[u8],
) -> UploadResult<()> {
    let staged = StagedFile::write(name, bytes)?;
    debug!("staged {} ({} bytes)", staged.path().display(), bytes.len());

    let payload = staged.contents()?;
    client.upload_object(bucket, name, payload).await
}
