//! Generic ordered collection mirrored to a JSON file.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StoreError;

/// A record that can live in a [`Collection`].
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Entity name used in logs and not-found errors.
    const ENTITY: &'static str;

    /// The record's identifier, unique within its collection.
    fn id(&self) -> &str;
}

/// An ordered collection of records backed by one JSON array on disk.
///
/// Insertion order is preserved and is the order handed back to readers.
#[derive(Debug)]
pub struct Collection<T> {
    path: PathBuf,
    items: Mutex<Vec<T>>,
}

impl<T: Record> Collection<T> {
    /// Load the collection from `path`.
    ///
    /// A missing file yields an empty collection. A file that exists but
    /// does not parse is an error; its contents are never discarded.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let items: Vec<T> = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        tracing::debug!(
            entity = T::ENTITY,
            path = %path.display(),
            count = items.len(),
            "Loaded collection"
        );

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    /// Snapshot of every record in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.items.lock().await.clone()
    }

    /// Find a record by identifier.
    pub async fn find(&self, id: &str) -> Option<T> {
        self.items
            .lock()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Enter the collection's mutual-exclusion region.
    ///
    /// Changes made through the guard are only durable once
    /// [`CollectionGuard::commit`] returns. Dropping the guard without
    /// committing leaves memory changed and the file stale.
    pub async fn lock(&self) -> CollectionGuard<'_, T> {
        CollectionGuard {
            path: &self.path,
            items: self.items.lock().await,
        }
    }
}

/// Exclusive access to a collection for one read-modify-persist cycle.
pub struct CollectionGuard<'a, T> {
    path: &'a Path,
    items: MutexGuard<'a, Vec<T>>,
}

impl<T: Record> CollectionGuard<'_, T> {
    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Append a record at the end of the collection.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the record with the given identifier, preserving the order of
    /// the rest.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Rewrite the backing file with the current contents and release the lock.
    pub async fn commit(self) -> Result<(), StoreError> {
        persist(self.path, self.items.as_slice()).await?;
        tracing::debug!(
            entity = T::ENTITY,
            path = %self.path.display(),
            count = self.items.len(),
            "Persisted collection"
        );
        Ok(())
    }
}

/// Write `items` as a pretty-printed JSON array.
///
/// The array goes to a sibling `.tmp` file first and is renamed over the
/// target, so the file is never observed half-written.
async fn persist<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(items).map_err(StoreError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, &json)
        .await
        .map_err(|e| StoreError::io(&tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| StoreError::io(path, e))?;

    Ok(())
}
