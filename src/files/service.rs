//! Async copy operations for payslip documents.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::Payslip;

/// Copies payslip documents between the bundle and user-visible storage.
///
/// Documents live under a read-only source directory; a payslip's
/// `file.source_locator` is a path relative to it. Downloads land in the
/// download directory under the display file name, replacing any earlier
/// copy. Previews land in the cache directory under a `preview_` prefix
/// and are reused once copied.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::files::FileStore;
/// use payslip_engine::store::PayslipStore;
///
/// # async fn example() -> Result<(), payslip_engine::error::EngineError> {
/// let store = PayslipStore::load("./data/payslips.yaml")?;
/// let files = FileStore::new("./assets/payslips", "./downloads", "./cache");
///
/// let payslip = &store.payslips()[0];
/// let path = files.download(payslip).await?;
/// println!("saved to {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    source_dir: PathBuf,
    download_dir: PathBuf,
    cache_dir: PathBuf,
}

impl FileStore {
    /// Creates a file store over the given directories.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - The read-only bundle holding the documents.
    /// * `download_dir` - Where downloads are saved permanently.
    /// * `cache_dir` - Where preview copies are cached.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        download_dir: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            download_dir: download_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Copies a payslip's document to the download directory.
    ///
    /// The destination is named after the display file name. An existing
    /// copy is replaced so a repeated download always reflects the
    /// bundled document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DocumentNotFound`] if the source document
    /// is missing, or [`EngineError::DocumentCopy`] on I/O failure.
    pub async fn download(&self, payslip: &Payslip) -> EngineResult<PathBuf> {
        let source = self.source_path(payslip);
        ensure_source_exists(&source).await?;

        ensure_dir(&self.download_dir).await?;
        let destination = self.download_dir.join(&payslip.file.name);

        if fs::try_exists(&destination).await.unwrap_or(false) {
            fs::remove_file(&destination)
                .await
                .map_err(|e| copy_error(&destination, e))?;
        }

        fs::copy(&source, &destination)
            .await
            .map_err(|e| copy_error(&destination, e))?;

        info!(
            payslip_id = %payslip.id,
            destination = %destination.display(),
            "Document downloaded"
        );
        Ok(destination)
    }

    /// Copies a payslip's document to the preview cache, if not already
    /// there, and returns the cached path for an external viewer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DocumentNotFound`] if the source document
    /// is missing, or [`EngineError::DocumentCopy`] on I/O failure.
    pub async fn preview(&self, payslip: &Payslip) -> EngineResult<PathBuf> {
        ensure_dir(&self.cache_dir).await?;
        let destination = self
            .cache_dir
            .join(format!("preview_{}", payslip.file.name));

        if fs::try_exists(&destination).await.unwrap_or(false) {
            debug!(
                payslip_id = %payslip.id,
                destination = %destination.display(),
                "Preview already cached"
            );
            return Ok(destination);
        }

        let source = self.source_path(payslip);
        ensure_source_exists(&source).await?;

        fs::copy(&source, &destination)
            .await
            .map_err(|e| copy_error(&destination, e))?;

        info!(
            payslip_id = %payslip.id,
            destination = %destination.display(),
            "Preview prepared"
        );
        Ok(destination)
    }

    /// Returns true if a file exists at the given path.
    pub async fn exists(&self, path: impl AsRef<Path>) -> bool {
        fs::try_exists(path.as_ref()).await.unwrap_or(false)
    }

    /// Deletes the file at the given path if present.
    ///
    /// A missing file is not an error; the outcome is the same.
    pub async fn remove(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        if fs::try_exists(path).await.unwrap_or(false) {
            fs::remove_file(path).await.map_err(|e| copy_error(path, e))?;
        }
        Ok(())
    }

    /// Resolves a payslip's opaque locator against the source directory.
    fn source_path(&self, payslip: &Payslip) -> PathBuf {
        self.source_dir.join(&payslip.file.source_locator)
    }
}

/// Fails with `DocumentNotFound` if the source document is missing.
async fn ensure_source_exists(source: &Path) -> EngineResult<()> {
    if fs::try_exists(source).await.unwrap_or(false) {
        Ok(())
    } else {
        Err(EngineError::DocumentNotFound {
            path: source.display().to_string(),
        })
    }
}

/// Creates a destination directory if it does not exist yet.
async fn ensure_dir(dir: &Path) -> EngineResult<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| copy_error(dir, e))
}

/// Maps an I/O failure on a destination path to `DocumentCopy`.
fn copy_error(path: &Path, error: std::io::Error) -> EngineError {
    EngineError::DocumentCopy {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
