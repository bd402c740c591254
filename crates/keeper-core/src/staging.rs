use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::Result;

/// A temporary file that exists only to be re-uploaded.
///
/// The file is removed when the guard is dropped, so every exit path of a
/// relay step (including `?` on a failed upload) cleans up after itself.
///
/// Names are not unique per handler. Two forwards of the same post handled at
/// once (e.g. from different chats) map to the same path, so one handler can
/// overwrite the other's file or delete it on drop before it is uploaded.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Reserve `dir/name` for a download. Nothing is created yet; the guard
    /// still removes whatever ends up at the path.
    pub fn reserve(dir: &Path, name: &str) -> Self {
        Self {
            path: dir.join(name),
        }
    }

    /// Create `dir/name` with `contents`.
    pub async fn write(dir: &Path, name: &str, contents: &str) -> Result<Self> {
        let staged = Self::reserve(dir, name);
        tokio::fs::write(&staged.path, contents.as_bytes()).await?;
        Ok(staged)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to remove staged file: {e}");
            }
        }
    }
}
