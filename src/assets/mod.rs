//! Cover Asset Storage
//!
//! Stores the optional cover image that accompanies a post, out-of-band from
//! the post record itself. The post row only holds an opaque reference
//! returned by [`CoverStore::store`]; the HTTP layer serves stored files
//! under `/uploads/`.
//!
//! The trait seam keeps the ownership/CRUD logic testable without a real
//! filesystem, and pins the asset lifecycle (store on upload, delete with
//! the post) behind two operations.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

/// Storage for cover images.
#[async_trait]
pub trait CoverStore: Send + Sync {
    /// Store an uploaded file and return an opaque reference to it.
    ///
    /// `original_name` is the client-supplied file name; its extension is
    /// preserved in the stored name so the file is served with a usable
    /// type.
    async fn store(&self, original_name: &str, data: &[u8]) -> io::Result<String>;

    /// Delete a previously stored file.
    async fn delete(&self, reference: &str) -> io::Result<()>;
}

/// Filesystem-backed cover store.
///
/// Uploads land under a random temporary name and are renamed to carry the
/// original extension. References are bare file names within `root`.
pub struct FsCoverStore {
    root: PathBuf,
}

impl FsCoverStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl CoverStore for FsCoverStore {
    async fn store(&self, original_name: &str, data: &[u8]) -> io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;

        let temp_name = Uuid::new_v4().to_string();
        let temp_path = self.root.join(&temp_name);
        tokio::fs::write(&temp_path, data).await?;

        // Rename to preserve the original extension, if there is one.
        let name = match original_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                let name = format!("{temp_name}.{ext}");
                tokio::fs::rename(&temp_path, self.root.join(&name)).await?;
                name
            }
            _ => temp_name,
        };

        Ok(name)
    }

    async fn delete(&self, reference: &str) -> io::Result<()> {
        tokio::fs::remove_file(self.root.join(reference)).await
    }
}
