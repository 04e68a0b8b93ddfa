//! CV document lookup.
//!
//! The CV lives at a configured filesystem location. [`CvSource`] opens its
//! parent directory as a capability and opens the file from there, so the
//! download handler can only ever reach that one file. The opened file is
//! streamed to the client in chunks rather than buffered whole.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use futures::stream::{self, Stream};
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Media type of the served CV.
pub const CV_CONTENT_TYPE: &str = "application/pdf";

const CHUNK_SIZE: usize = 64 * 1024;

/// Errors raised while opening the CV.
#[derive(Debug, Clone, Error)]
pub enum CvError {
    /// Nothing readable exists at the configured location.
    #[error("CV file not found at {0}")]
    NotFound(Utf8PathBuf),

    /// The file exists but could not be opened.
    #[error("failed to read CV file at {path}: {source}")]
    Unreadable {
        /// Configured location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<io::Error>,
    },
}

/// An opened CV, ready to be streamed as an attachment.
#[derive(Debug)]
pub struct CvDocument {
    file: File,
    size: u64,
    download_name: String,
}

impl CvDocument {
    /// Returns the file size in bytes, taken when the file was opened.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the `Content-Disposition` header value for this document.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        attachment_disposition(&self.download_name)
    }

    /// Consumes the document and yields its contents in chunks.
    pub fn into_chunks(self) -> impl Stream<Item = io::Result<Vec<u8>>> + Send + 'static {
        stream::try_unfold(self.file, next_chunk)
    }
}

async fn next_chunk(mut file: File) -> io::Result<Option<(Vec<u8>, File)>> {
    let mut buf = vec![0; CHUNK_SIZE];
    let read = file.read(&mut buf).await?;
    if read == 0 {
        return Ok(None);
    }
    buf.truncate(read);
    Ok(Some((buf, file)))
}

/// Formats a `Content-Disposition` value offering `download_name`.
///
/// # Examples
///
/// ```
/// use folio::cv::attachment_disposition;
///
/// assert_eq!(
///     attachment_disposition("Aditya_Nirgude_CV.pdf"),
///     "attachment; filename=Aditya_Nirgude_CV.pdf"
/// );
/// ```
#[must_use]
pub fn attachment_disposition(download_name: &str) -> String {
    format!("attachment; filename={download_name}")
}

/// Where the CV lives and what to call it when downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvSource {
    path: Utf8PathBuf,
    download_name: String,
}

impl CvSource {
    /// Creates a source for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, download_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            download_name: download_name.into(),
        }
    }

    /// Returns the configured file location.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Opens the CV on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns [`CvError::NotFound`] if the file, or its directory, is absent
    /// or is not a regular file, and [`CvError::Unreadable`] for other I/O
    /// failures.
    pub async fn open(&self) -> Result<CvDocument, CvError> {
        let source = self.clone();
        let (file, size) = tokio::task::spawn_blocking(move || source.open_std())
            .await
            .map_err(|err| CvError::Unreadable {
                path: self.path.clone(),
                source: Arc::new(io::Error::other(err)),
            })??;

        Ok(CvDocument {
            file: File::from_std(file),
            size,
            download_name: self.download_name.clone(),
        })
    }

    fn open_std(&self) -> Result<(std::fs::File, u64), CvError> {
        let (dir, file_name) = self.open_parent()?;
        let metadata = dir.metadata(file_name).map_err(|err| self.classify(err))?;
        if !metadata.is_file() {
            return Err(CvError::NotFound(self.path.clone()));
        }
        let file = dir
            .open(file_name)
            .map_err(|err| self.classify(err))?
            .into_std();
        Ok((file, metadata.len()))
    }

    fn open_parent(&self) -> Result<(Dir, &str), CvError> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| CvError::NotFound(self.path.clone()))?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| self.classify(err))?;
        Ok((dir, file_name))
    }

    fn classify(&self, err: io::Error) -> CvError {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                CvError::NotFound(self.path.clone())
            }
            _ => CvError::Unreadable {
                path: self.path.clone(),
                source: Arc::new(err),
            },
        }
    }
}
