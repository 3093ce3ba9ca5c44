//! Carousel image record.

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// A single carousel image as stored in `carousel.json`.
///
/// The identifier is persisted as `_id`, unlike the other collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselImage {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_persisted_as_underscore_id() {
        let image = CarouselImage {
            id: "c1".into(),
            url: "http://localhost:3000/uploads/x.jpg".into(),
        };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["_id"], "c1");
        assert!(json.get("id").is_none());

        let back: CarouselImage = serde_json::from_value(json).unwrap();
        assert_eq!(back, image);
    }
}
