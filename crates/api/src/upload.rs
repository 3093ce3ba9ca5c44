//! Multipart upload handling.
//!
//! The whole form is read into memory and every file's extension is checked
//! before anything is written, so a rejected request never leaves a file in
//! the upload directory. Accepted files are then written under generated
//! names and handed to the store as filenames.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use folio_core::media;
use folio_store::UploadDir;

use crate::error::{AppError, AppResult};

/// An uploaded file held in memory, not yet written to disk.
#[derive(Debug)]
pub struct PendingFile {
    /// Lower-cased extension taken from the client's filename.
    pub ext: String,
    pub data: Bytes,
}

/// A parsed multipart form: text fields plus the files of one field.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: Vec<PendingFile>,
}

impl UploadForm {
    /// Read every part of `multipart`.
    ///
    /// A request that is not `multipart/form-data` at all is a bad request
    /// with the usual JSON error body.
    ///
    /// Parts named `file_field` are collected as files; other parts that
    /// carry no filename become text fields. Unknown file parts are ignored,
    /// as are empty file parts (a form submitted with no file chosen).
    pub async fn read(
        multipart: Result<Multipart, MultipartRejection>,
        file_field: &str,
    ) -> AppResult<Self> {
        let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(str::to_string);

            match file_name {
                Some(file_name) if name == file_field => {
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    let ext = media::image_extension(&file_name)?;
                    form.files.push(PendingFile { ext, data });
                }
                Some(_) => {} // ignore files under unexpected names
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.body_text()))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Take the text field `name`, if it was sent.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    /// Write every pending file to `uploads`, returning the generated
    /// filenames in upload order.
    ///
    /// If any write fails the files already written by this call are removed.
    pub async fn save_files(&self, uploads: &UploadDir) -> AppResult<Vec<String>> {
        let mut saved = Vec::with_capacity(self.files.len());
        for file in &self.files {
            match uploads.save(&file.ext, &file.data).await {
                Ok(name) => saved.push(name),
                Err(e) => {
                    discard(uploads, &saved).await;
                    return Err(e.into());
                }
            }
        }
        Ok(saved)
    }
}

/// Remove freshly saved files whose store operation did not go through.
pub async fn discard(uploads: &UploadDir, file_names: &[String]) {
    for name in file_names {
        uploads.remove_file(name).await;
    }
}
