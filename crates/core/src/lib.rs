//! Domain vocabulary for the portfolio backend.
//!
//! Record types, identifiers, image-reference naming and input validation.
//! Nothing in this crate touches the filesystem.

pub mod error;
pub mod media;
pub mod models;
pub mod types;
pub mod validation;
