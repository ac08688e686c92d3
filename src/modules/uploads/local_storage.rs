use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Stores uploaded files under a single directory, keyed by their original name.
///
/// Writes overwrite any existing file of the same name; concurrent writers of
/// one name race and the last one wins.
pub struct LocalUploadStorage {
    root: PathBuf,
}

impl LocalUploadStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Write `data` to `<root>/<file_name>` and return the written path.
    ///
    /// `file_name` must already be a single safe path component.
    pub async fn save(&self, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
        let path = self.root.join(file_name);
        tokio::fs::write(&path, data).await?;

        debug!("Upload written: path={}, size={}", path.display(), data.len());

        Ok(path)
    }
}
