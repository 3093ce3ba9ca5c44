//! File-backed collection store.
//!
//! Each collection is an ordered list of records mirrored to one JSON file.
//! Every mutation rewrites the whole file before returning (write-through),
//! and one async mutex per collection serializes the read-modify-persist
//! cycle. Collections that own uploaded images keep the upload directory
//! consistent with record membership.

pub mod collection;
pub mod error;
pub mod repositories;
pub mod uploads;

pub use collection::{Collection, CollectionGuard, Record};
pub use error::StoreError;
pub use uploads::UploadDir;
