// ABOUTME: Media storage abstraction for uploaded portfolio assets
// ABOUTME: Filesystem-backed implementation that stores and serves upload bytes by name

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

/// Storage backend for uploaded media files
///
/// Implementations store opaque byte blobs under caller-chosen names and
/// read them back. Names are flat: a stored name never contains path
/// separators, so a backend can map names directly onto its own namespace.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persist `data` under `stored_name`, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot write the blob or if
    /// `stored_name` is not a safe flat name.
    async fn save(&self, stored_name: &str, data: Bytes) -> Result<()>;

    /// Read the blob stored under `stored_name`
    ///
    /// Returns `Ok(None)` when no blob with that name exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails for any reason other than
    /// the blob being absent.
    async fn read(&self, stored_name: &str) -> Result<Option<Bytes>>;
}

/// Media storage on the local filesystem
///
/// Stores every blob as a regular file directly under a single root
/// directory. The directory is created on construction if missing.
#[derive(Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    /// Create a local storage rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn new(root: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create upload directory {}", root.display()))?;
        Ok(Self { root })
    }

    /// Root directory holding the stored files
    #[must_use]
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn resolve(&self, stored_name: &str) -> Result<PathBuf> {
        // Names come from our own generator or from URL path segments that
        // the routes have already vetted, but the invariant is enforced here
        // too so the storage root can never be escaped.
        if !is_safe_filename(stored_name) {
            anyhow::bail!("Invalid stored file name: {stored_name}");
        }
        Ok(self.root.join(stored_name))
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn save(&self, stored_name: &str, data: Bytes) -> Result<()> {
        let path = self.resolve(stored_name)?;
        tokio::fs::write(&path, &data)
            .await
            .with_context(|| format!("Failed to write uploaded file {}", path.display()))?;
        Ok(())
    }

    async fn read(&self, stored_name: &str) -> Result<Option<Bytes>> {
        let path = self.resolve(stored_name)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read stored file {}", path.display()))
            }
        }
    }
}

/// Check that a file name is a single flat path segment
///
/// Rejects empty names, absolute paths, parent references, and anything
/// containing a path separator. Every name handed to a [`MediaStorage`]
/// must pass this check.
#[must_use]
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

/// Derive a stored file name from a client-supplied original name
///
/// The original name is reduced to its final path component, whitespace is
/// collapsed to underscores, and hostile characters are dropped. A
/// millisecond timestamp prefix keeps repeated uploads of the same file
/// from overwriting each other.
#[must_use]
pub fn stored_filename(original: &str, timestamp_millis: i64) -> String {
    let base = sanitize_filename(original);
    format!("{timestamp_millis}_{base}")
}

/// Strip a client-supplied file name down to a safe flat segment
#[must_use]
pub fn sanitize_filename(original: &str) -> String {
    // Browsers send bare names, but nothing stops a client from sending a
    // path. Keep only the final component and only benign characters.
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '(' | ')'))
        .collect();

    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}
