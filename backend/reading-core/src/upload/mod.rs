//! Storage for book files uploaded by teachers and parents.
//!
//! Files are stored as-is; their content is not parsed.

use crate::error::ReadingError;

use common::ErrorLocation;
use models::UploadResponse;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use tokio::fs as TokioFs;

pub const UPLOAD_FIELD: &str = "book";

const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";
const NO_FILE_MESSAGE: &str = "No file uploaded";
const UNSUPPORTED_FILE_MESSAGE: &str = "Only PDF, EPUB, and TXT files are allowed";
const GENERIC_CONTENT_TYPE: &str = "application/octet-stream";

/// Kinds of book file accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFileKind {
    Pdf,
    Epub,
    Text,
}

impl BookFileKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(BookFileKind::Pdf),
            "epub" => Some(BookFileKind::Epub),
            "txt" => Some(BookFileKind::Text),
            _ => None,
        }
    }

    fn accepts_content_type(&self, content_type: &str) -> bool {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.starts_with(GENERIC_CONTENT_TYPE) {
            return true;
        }

        match self {
            BookFileKind::Pdf => content_type.contains("pdf"),
            BookFileKind::Epub => content_type.contains("epub"),
            BookFileKind::Text => {
                content_type.starts_with("text/plain") || content_type.contains("txt")
            }
        }
    }
}

/// Check that a file name and declared content type describe an accepted book file.
///
/// # Errors
///
/// Returns [`ReadingError::UnsupportedFile`] for any other file.
#[track_caller]
pub fn validate_upload(
    original_name: &str,
    content_type: Option<&str>,
) -> Result<BookFileKind, ReadingError> {
    let kind = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(BookFileKind::from_extension);

    match (kind, content_type) {
        (Some(kind), None) => Ok(kind),
        (Some(kind), Some(declared)) if kind.accepts_content_type(declared) => Ok(kind),
        _ => Err(ReadingError::UnsupportedFile {
            message: UNSUPPORTED_FILE_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Reduce an uploaded name to a safe single path component.
pub fn sanitize_file_name(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        String::from("upload")
    } else {
        cleaned.to_string()
    }
}

/// Writes accepted uploads into a single directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Error for a multipart body with no `book` field.
    #[track_caller]
    pub fn no_file() -> ReadingError {
        ReadingError::NoFile {
            message: NO_FILE_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Validate and persist one uploaded file.
    ///
    /// The stored name is `<unix millis>-<sanitized original name>`. The
    /// upload directory is created on first use.
    ///
    /// # Errors
    ///
    /// - [`ReadingError::UnsupportedFile`] - wrong extension or content type
    /// - [`ReadingError::PayloadTooLarge`] - file exceeds the configured cap
    /// - [`ReadingError::Storage`] - directory creation or write failed
    pub async fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<UploadResponse, ReadingError> {
        let kind = validate_upload(original_name, content_type)?;

        if bytes.len() > self.max_bytes {
            return Err(ReadingError::PayloadTooLarge {
                message: format!("File exceeds the {} byte upload limit", self.max_bytes),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        TokioFs::create_dir_all(&self.dir).await?;

        let filename = format!("{}-{}", unix_millis(), sanitize_file_name(original_name));
        let path = self.dir.join(&filename);

        debug!("Writing {:?} upload to {}", kind, path.display());
        TokioFs::write(&path, bytes).await?;

        info!(
            "Stored upload '{}' as {} ({} bytes)",
            original_name,
            path.display(),
            bytes.len()
        );

        Ok(UploadResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            filename,
            original_name: original_name.to_string(),
            size: bytes.len() as u64,
            path: path.display().to_string(),
        })
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
