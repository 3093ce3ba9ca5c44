//! Portfolio project record and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// A portfolio project as stored in `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Between one and five image references, in upload order.
    pub image_urls: Vec<String>,
}

/// DTO for creating a new project. Images arrive separately as uploads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Project {
    /// Apply the text fields of `input`, skipping any that are absent or empty.
    ///
    /// Image references are not touched here; replacing them also means
    /// removing the old files, which is the store's job.
    pub fn apply_update(&mut self, input: &UpdateProject) {
        if let Some(title) = non_empty(&input.title) {
            self.title = title.to_string();
        }
        if let Some(description) = non_empty(&input.description) {
            self.description = description.to_string();
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            id: "p1".into(),
            title: "Bridge".into(),
            description: "Steel truss".into(),
            image_urls: vec!["http://localhost:3000/uploads/a.png".into()],
        }
    }

    #[test]
    fn serializes_image_urls_in_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["imageUrls"][0], "http://localhost:3000/uploads/a.png");
        assert!(json.get("image_urls").is_none());
    }

    #[test]
    fn apply_update_replaces_only_title() {
        let mut project = sample();
        project.apply_update(&UpdateProject {
            title: Some("Tower".into()),
            description: None,
        });
        assert_eq!(project.title, "Tower");
        assert_eq!(project.description, "Steel truss");
        assert_eq!(project.image_urls.len(), 1);
    }

    #[test]
    fn apply_update_ignores_empty_values() {
        let mut project = sample();
        project.apply_update(&UpdateProject {
            title: Some(String::new()),
            description: Some(String::new()),
        });
        assert_eq!(project, sample());
    }
}
