//! Record structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` record struct matching its persisted JSON shape
//! - A create DTO carrying the caller-supplied fields
//! - An update DTO (all `Option` fields) where the record is updatable

pub mod carousel;
pub mod project;
pub mod video;
