//! Repository for `carousel.json`.

use std::path::Path;
use std::sync::Arc;

use folio_core::models::carousel::CarouselImage;
use folio_core::types::new_record_id;
use folio_core::validation;

use crate::collection::{Collection, Record};
use crate::error::StoreError;
use crate::uploads::UploadDir;

/// Backing file name inside the data directory.
pub const CAROUSEL_FILE: &str = "carousel.json";

impl Record for CarouselImage {
    const ENTITY: &'static str = "CarouselImage";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Provides create/list/delete for carousel images.
#[derive(Debug)]
pub struct CarouselImageRepo {
    images: Collection<CarouselImage>,
    uploads: Arc<UploadDir>,
}

impl CarouselImageRepo {
    pub async fn open(data_dir: &Path, uploads: Arc<UploadDir>) -> Result<Self, StoreError> {
        let images = Collection::open(data_dir.join(CAROUSEL_FILE)).await?;
        Ok(Self { images, uploads })
    }

    pub async fn list(&self) -> Vec<CarouselImage> {
        self.images.list().await
    }

    pub async fn find_by_id(&self, id: &str) -> Option<CarouselImage> {
        self.images.find(id).await
    }

    /// Append an entry for exactly one already-saved file.
    pub async fn create(&self, image_files: &[String]) -> Result<CarouselImage, StoreError> {
        validation::validate_carousel_images(image_files.len())?;

        let image = CarouselImage {
            id: new_record_id(),
            url: self.uploads.reference_for(&image_files[0]),
        };

        let mut guard = self.images.lock().await;
        guard.push(image.clone());
        guard.commit().await?;

        tracing::info!(id = %image.id, "Carousel image created");
        Ok(image)
    }

    /// Delete an entry and its file. Returns `false` if no entry has the
    /// given `id`.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut guard = self.images.lock().await;
        let Some(image) = guard.remove(id) else {
            return Ok(false);
        };

        self.uploads.remove_references(&[image.url]).await;
        guard.commit().await?;

        tracing::info!(id = %id, "Carousel image deleted");
        Ok(true)
    }
}
