//! Repository for `projects.json`.

use std::path::Path;
use std::sync::Arc;

use folio_core::models::project::{CreateProject, Project, UpdateProject};
use folio_core::types::new_record_id;
use folio_core::validation;

use crate::collection::{Collection, Record};
use crate::error::StoreError;
use crate::uploads::UploadDir;

/// Backing file name inside the data directory.
pub const PROJECTS_FILE: &str = "projects.json";

impl Record for Project {
    const ENTITY: &'static str = "Project";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Provides CRUD operations for projects and keeps their images in step.
#[derive(Debug)]
pub struct ProjectRepo {
    projects: Collection<Project>,
    uploads: Arc<UploadDir>,
}

impl ProjectRepo {
    /// Load `projects.json` from `data_dir`.
    pub async fn open(data_dir: &Path, uploads: Arc<UploadDir>) -> Result<Self, StoreError> {
        let projects = Collection::open(data_dir.join(PROJECTS_FILE)).await?;
        Ok(Self { projects, uploads })
    }

    /// All projects in creation order.
    pub async fn list(&self) -> Vec<Project> {
        self.projects.list().await
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Project> {
        self.projects.find(id).await
    }

    /// Append a new project whose images are the already-saved `image_files`.
    ///
    /// Fails with a validation error, without touching the collection, unless
    /// one to five files are given.
    pub async fn create(
        &self,
        input: &CreateProject,
        image_files: &[String],
    ) -> Result<Project, StoreError> {
        validation::validate_project_images(image_files.len())?;

        let project = Project {
            id: new_record_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            image_urls: self.references(image_files),
        };

        let mut guard = self.projects.lock().await;
        guard.push(project.clone());
        guard.commit().await?;

        tracing::info!(id = %project.id, images = project.image_urls.len(), "Project created");
        Ok(project)
    }

    /// Update a project in place.
    ///
    /// Title and description change only when a non-empty value is given.
    /// When `image_files` is non-empty the files behind the current images
    /// are removed (best-effort) and replaced by references to the new ones.
    ///
    /// Returns `None` if no project has the given `id`.
    pub async fn update(
        &self,
        id: &str,
        input: &UpdateProject,
        image_files: &[String],
    ) -> Result<Option<Project>, StoreError> {
        validation::validate_project_image_limit(image_files.len())?;

        let mut guard = self.projects.lock().await;
        let Some(project) = guard.find_mut(id) else {
            return Ok(None);
        };

        project.apply_update(input);
        if !image_files.is_empty() {
            self.uploads.remove_references(&project.image_urls).await;
            project.image_urls = self.references(image_files);
        }
        let updated = project.clone();

        guard.commit().await?;

        tracing::info!(id = %id, replaced_images = !image_files.is_empty(), "Project updated");
        Ok(Some(updated))
    }

    /// Delete a project and its image files. Returns `false` if no project
    /// has the given `id`.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut guard = self.projects.lock().await;
        let Some(project) = guard.remove(id) else {
            return Ok(false);
        };

        self.uploads.remove_references(&project.image_urls).await;
        guard.commit().await?;

        tracing::info!(id = %id, "Project deleted");
        Ok(true)
    }

    fn references(&self, image_files: &[String]) -> Vec<String> {
        image_files
            .iter()
            .map(|name| self.uploads.reference_for(name))
            .collect()
    }
}
