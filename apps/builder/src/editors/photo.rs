use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use tracing::debug;

use crate::errors::BuilderError;

/// Reads an image file and returns it as a `data:` URI suitable for
/// `PersonalInfo::photo`.
///
/// The format is sniffed from the file's magic bytes; the extension is ignored.
pub async fn read_photo(path: &Path) -> Result<String, BuilderError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| BuilderError::PhotoIngestion {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let uri = encode_data_uri(&bytes).map_err(|reason| BuilderError::PhotoIngestion {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!(path = %path.display(), size = bytes.len(), "Photo loaded");
    Ok(uri)
}

fn encode_data_uri(bytes: &[u8]) -> Result<String, String> {
    if bytes.is_empty() {
        return Err("file is empty".to_string());
    }
    let format = image::guess_format(bytes).map_err(|e| e.to_string())?;
    let mime = mime_type(format).ok_or_else(|| format!("unsupported image format {format:?}"))?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn mime_type(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Tiff => Some("image/tiff"),
        ImageFormat::Ico => Some("image/x-icon"),
        _ => None,
    }
}
