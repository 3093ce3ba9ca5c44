//! Uploaded image naming and image-reference helpers.
//!
//! An image reference has the shape `<base-address>/uploads/<token>.<ext>`.
//! The token is a random UUID so stored files never collide and never carry
//! the uploader's original filename.

use crate::error::CoreError;

/// URL path segment under which the upload directory is served.
pub const UPLOADS_PATH: &str = "uploads";

/// Image extensions accepted for upload (lower-case, without the dot).
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "webp", "svg", "avif"];

/// Extract and validate the extension of an uploaded file's original name.
///
/// Returns the lower-cased extension.
pub fn image_extension(original_name: &str) -> Result<String, CoreError> {
    let ext = match original_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
        _ => {
            return Err(CoreError::Validation(format!(
                "File '{original_name}' has no extension. Supported: {}",
                SUPPORTED_IMAGE_EXTENSIONS.join(", ")
            )))
        }
    };

    if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported image format '.{ext}'. Supported: {}",
            SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        )))
    }
}

/// Generate a stored filename: a fresh random token plus `ext`.
pub fn generated_file_name(ext: &str) -> String {
    format!("{}.{ext}", uuid::Uuid::new_v4().simple())
}

/// Build the public reference for a stored file.
pub fn image_reference(base_url: &str, file_name: &str) -> String {
    format!(
        "{}/{UPLOADS_PATH}/{file_name}",
        base_url.trim_end_matches('/')
    )
}

/// Recover the stored filename from an image reference.
///
/// Returns `None` when the reference does not point into the upload
/// directory or when the trailing segment is not a plain filename.
pub fn file_name_from_reference(reference: &str) -> Option<&str> {
    let marker = format!("/{UPLOADS_PATH}/");
    let (_, name) = reference.rsplit_once(marker.as_str())?;

    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '?', '#']);
    plain.then_some(name)
}
