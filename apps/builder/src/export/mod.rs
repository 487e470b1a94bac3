// Document export: flatten the résumé into styled blocks, package them as .docx,
// and persist the artifact atomically. Export never mutates the document.

pub mod blocks;
pub mod docx;

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::BuilderError;
use crate::models::Document;

pub const DOCX_EXTENSION: &str = "docx";
pub const HTML_EXTENSION: &str = "html";

/// A finished export, ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Bytes,
}

/// `"Jane Doe"` → `"Jane_Doe_Resume.docx"`. Every run of whitespace collapses
/// to a single underscore.
pub fn suggested_file_name(full_name: &str) -> String {
    resume_file_name(full_name, DOCX_EXTENSION)
}

/// Same stem as [`suggested_file_name`] with another extension.
///
/// Path separators, characters Windows rejects in file names and control
/// characters become `_`, so the result is always one plain file name.
pub fn resume_file_name(full_name: &str, extension: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut in_whitespace = false;
    for c in full_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        let unsafe_char =
            matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control();
        if unsafe_char {
            stem.push('_');
        } else {
            stem.push(c);
        }
    }
    format!("{stem}_Resume.{extension}")
}

/// Serializes the document to a `.docx` artifact.
pub fn export(doc: &Document) -> Result<ExportArtifact, BuilderError> {
    let blocks = blocks::flatten(doc);
    debug!(blocks = blocks.len(), "Flattened document for export");

    let bytes = docx::write_docx(&doc.personal_info.full_name, &blocks)?;
    let file_name = suggested_file_name(&doc.personal_info.full_name);
    info!(file = %file_name, size = bytes.len(), "Resume exported");

    Ok(ExportArtifact {
        file_name,
        bytes: Bytes::from(bytes),
    })
}

/// Writes the artifact into `dir` under its suggested name.
pub async fn save(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf, BuilderError> {
    save_bytes(&artifact.file_name, artifact.bytes.clone(), dir).await
}

/// Writes `bytes` to `dir/file_name`.
///
/// `file_name` must be a single plain path component. The bytes go to a
/// temporary file in the same directory which is then renamed into place, so
/// a failed save never leaves a truncated file behind.
pub async fn save_bytes(
    file_name: &str,
    bytes: Bytes,
    dir: &Path,
) -> Result<PathBuf, BuilderError> {
    let mut components = Path::new(file_name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        return Err(BuilderError::InvalidFileName(file_name.to_string()));
    }

    let target = dir.join(file_name);
    let dir = dir.to_path_buf();
    let destination = target.clone();

    tokio::task::spawn_blocking(move || -> Result<(), BuilderError> {
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&destination).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(|e| {
        BuilderError::Internal(anyhow::anyhow!("spawn_blocking failed in export save: {e}"))
    })??;

    info!(path = %target.display(), "File saved");
    Ok(target)
}
