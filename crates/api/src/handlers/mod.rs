pub mod carousel;
pub mod project;
pub mod video;
