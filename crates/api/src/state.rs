use std::sync::Arc;

use folio_store::repositories::{CarouselImageRepo, ProjectRepo, VideoRepo};
use folio_store::{StoreError, UploadDir};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Each collection
/// is opened once at startup and guarded by its own lock.
#[derive(Clone)]
pub struct AppState {
    /// Upload directory shared by the image-owning collections.
    pub uploads: Arc<UploadDir>,
    pub projects: Arc<ProjectRepo>,
    pub carousel: Arc<CarouselImageRepo>,
    pub videos: Arc<VideoRepo>,
}

impl AppState {
    /// Open the upload directory and load every collection from the data
    /// directory named in `config`.
    ///
    /// Fails if any collection file exists but cannot be parsed.
    pub async fn open(config: &ServerConfig) -> Result<Self, StoreError> {
        let uploads = Arc::new(
            UploadDir::open(&config.upload_dir, config.public_base_url.clone()).await?,
        );

        let projects = ProjectRepo::open(&config.data_dir, Arc::clone(&uploads)).await?;
        let carousel = CarouselImageRepo::open(&config.data_dir, Arc::clone(&uploads)).await?;
        let videos = VideoRepo::open(&config.data_dir).await?;

        Ok(Self {
            uploads,
            projects: Arc::new(projects),
            carousel: Arc::new(carousel),
            videos: Arc::new(videos),
        })
    }
}
