use std::path::PathBuf;

use thiserror::Error;

/// Library-level error type.
///
/// Validation problems are not errors: editors hand back a `Rejection` value
/// and the wizard simply stays on the step. Only unexpected ingestion and
/// export failures travel through here.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Photo ingestion failed for {path}: {reason}")]
    PhotoIngestion { path: PathBuf, reason: String },

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to write '{0}': not a plain file name")]
    InvalidFileName(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// What the user gets told about a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub code: &'static str,
    pub message: String,
}

impl BuilderError {
    /// Maps the error to a stable code and a user-facing message. Logging is
    /// left to whoever handles the error.
    pub fn notice(&self) -> Notice {
        let (code, message) = match self {
            BuilderError::PhotoIngestion { .. } => (
                "PHOTO_INGESTION_FAILED",
                "The selected photo could not be loaded. Your current photo was kept.".to_string(),
            ),
            BuilderError::Zip(_) | BuilderError::Xml(_) | BuilderError::InvalidFileName(_) => (
                "EXPORT_FAILED",
                "The resume could not be exported. Nothing was saved.".to_string(),
            ),
            BuilderError::Io(_) => ("IO_ERROR", "A file could not be read or written.".to_string()),
            BuilderError::Json(e) => (
                "INVALID_DOCUMENT",
                format!("The resume data could not be read: {e}"),
            ),
            BuilderError::Internal(_) => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        Notice { code, message }
    }

    /// Logs the failure once, at a level matching who can fix it, and returns
    /// the notice for the user.
    pub fn report(&self) -> Notice {
        let notice = self.notice();
        match self {
            BuilderError::PhotoIngestion { .. } | BuilderError::Json(_) => {
                tracing::warn!(code = notice.code, "{self}")
            }
            _ => tracing::error!(code = notice.code, "{self:?}"),
        }
        notice
    }
}
