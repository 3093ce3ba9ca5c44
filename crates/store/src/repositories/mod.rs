//! Repository layer.
//!
//! Each repository owns one [`Collection`](crate::Collection) and, for the
//! image-owning collections, a handle to the shared
//! [`UploadDir`](crate::UploadDir). Handlers receive repositories through
//! application state; there is no ambient global collection.

pub mod carousel_repo;
pub mod project_repo;
pub mod video_repo;

pub use carousel_repo::CarouselImageRepo;
pub use project_repo::ProjectRepo;
pub use video_repo::VideoRepo;
