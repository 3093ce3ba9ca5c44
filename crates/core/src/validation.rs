//! Input validation for collection create/update operations.

use validator::ValidateUrl;

use crate::error::CoreError;
use crate::models::video::CreateVideo;

/// Maximum number of images a project may hold.
pub const MAX_PROJECT_IMAGES: usize = 5;

/// Validate the number of images supplied when creating a project (1..=5).
pub fn validate_project_images(count: usize) -> Result<(), CoreError> {
    if count == 0 {
        return Err(CoreError::Validation(
            "At least one image is required".into(),
        ));
    }
    validate_project_image_limit(count)
}

/// Validate the number of replacement images supplied on update (0..=5).
///
/// Zero means "keep the current images".
pub fn validate_project_image_limit(count: usize) -> Result<(), CoreError> {
    if count > MAX_PROJECT_IMAGES {
        return Err(CoreError::Validation(format!(
            "A project can have at most {MAX_PROJECT_IMAGES} images, got {count}"
        )));
    }
    Ok(())
}

/// Validate the number of images supplied for a carousel entry (exactly 1).
pub fn validate_carousel_images(count: usize) -> Result<(), CoreError> {
    match count {
        0 => Err(CoreError::Validation("An image file is required".into())),
        1 => Ok(()),
        n => Err(CoreError::Validation(format!(
            "A carousel entry takes exactly one image, got {n}"
        ))),
    }
}

/// Validate a video DTO, returning the `(url, title)` pair on success.
///
/// Absent and empty fields are both treated as missing.
pub fn validate_video(input: &CreateVideo) -> Result<(String, String), CoreError> {
    let url = input.url.as_deref().filter(|s| !s.is_empty());
    let title = input.title.as_deref().filter(|s| !s.is_empty());

    let (Some(url), Some(title)) = (url, title) else {
        return Err(CoreError::Validation("URL and title are required".into()));
    };

    let url = url.to_string();
    if !url.validate_url() {
        return Err(CoreError::Validation("Invalid URL format".into()));
    }

    Ok((url, title.to_string()))
}
