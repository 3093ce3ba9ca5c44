//! Repository for `videos.json`. Videos own no files.

use std::path::Path;

use folio_core::models::video::{CreateVideo, Video};
use folio_core::types::new_record_id;
use folio_core::validation;

use crate::collection::{Collection, Record};
use crate::error::StoreError;

/// Backing file name inside the data directory.
pub const VIDEOS_FILE: &str = "videos.json";

impl Record for Video {
    const ENTITY: &'static str = "Video";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug)]
pub struct VideoRepo {
    videos: Collection<Video>,
}

impl VideoRepo {
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let videos = Collection::open(data_dir.join(VIDEOS_FILE)).await?;
        Ok(Self { videos })
    }

    pub async fn list(&self) -> Vec<Video> {
        self.videos.list().await
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Video> {
        self.videos.find(id).await
    }

    /// Validate `input` and append a new video.
    ///
    /// Missing `url`/`title` or a malformed URL fail before the collection
    /// is touched.
    pub async fn create(&self, input: &CreateVideo) -> Result<Video, StoreError> {
        let (url, title) = validation::validate_video(input)?;
        let video = Video {
            id: new_record_id(),
            url,
            title,
        };

        let mut guard = self.videos.lock().await;
        guard.push(video.clone());
        guard.commit().await?;

        tracing::info!(id = %video.id, "Video created");
        Ok(video)
    }

    /// Delete a video. Returns `false` if no video has the given `id`.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut guard = self.videos.lock().await;
        if guard.remove(id).is_none() {
            return Ok(false);
        }
        guard.commit().await?;

        tracing::info!(id = %id, "Video deleted");
        Ok(true)
    }
}
