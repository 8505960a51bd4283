//! JSON file catalog.
//!
//! Reads one JSON file per record from a catalog directory:
//!
//! ```text
//! <root>/courses/<course-id>.json
//! <root>/users/<user-id>.json
//! ```
//!
//! A whole catalog can also live in a single `{ "courses": [...], "users": [...] }`
//! file, see [`load_catalog_file`].

use std::path::{Path, PathBuf};

use modtrack_core::{Catalog, Course, CourseId, User, UserId};
use tokio::fs;
use tracing::{debug, warn};

use super::{CatalogSource, Result, StorageError};

/// Directory-backed JSON catalog.
pub struct JsonCatalog {
    root: PathBuf,
}

impl JsonCatalog {
    /// Open an existing catalog directory. Nothing is created.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !fs::metadata(&root).await.map(|m| m.is_dir()).unwrap_or(false) {
            return Err(StorageError::NotFound(format!(
                "catalog directory {}",
                root.display()
            )));
        }
        debug!("Opened catalog at {}", root.display());
        Ok(Self { root })
    }

    /// Catalog root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn course_path(&self, id: &CourseId) -> PathBuf {
        self.root.join("courses").join(format!("{}.json", id))
    }

    fn user_path(&self, id: &UserId) -> PathBuf {
        self.root.join("users").join(format!("{}.json", id))
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonCatalog {
    async fn load_course(&self, id: &CourseId) -> Result<Option<Course>> {
        read_json(&self.course_path(id)).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        list_dir(&self.root.join("courses")).await
    }

    async fn load_user(&self, id: &UserId) -> Result<Option<User>> {
        read_json(&self.user_path(id)).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        list_dir(&self.root.join("users")).await
    }
}

/// Read a whole catalog from a single JSON file.
pub async fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    match read_json(path).await? {
        Some(catalog) => Ok(catalog),
        None => Err(StorageError::NotFound(format!("catalog file {}", path.display()))),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Records from every `*.json` file in `dir`, ordered by file name.
///
/// A missing directory is an empty listing. Malformed files are skipped with
/// a warning.
async fn list_dir<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut rd = match fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut paths = Vec::new();
    while let Some(entry) = rd.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut items = Vec::with_capacity(paths.len());
    for path in paths {
        match read_json(&path).await {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    Ok(items)
}
