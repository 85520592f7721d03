use crate::errors::ServerError;
use crate::listings::Category;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory holding one JSON array file per category.
#[derive(Debug, Clone)]
pub struct ListingStore {
    dir: PathBuf,
}

impl ListingStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(category.file_name())
    }

    /// Returns the category's file contents unparsed.
    pub fn load_raw(&self, category: Category) -> Result<String, ServerError> {
        let path = self.path_for(category);

        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ServerError::NotFound,
            _ => ServerError::DataError(format!("Read {} failed: {e}", path.display())),
        })
    }

    /// Overwrites the category's file with `listings` as a pretty JSON array.
    pub fn save<T: Serialize>(&self, category: Category, listings: &[T]) -> Result<(), ServerError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ServerError::DataError(format!("Create {} failed: {e}", self.dir.display()))
        })?;

        let json = serde_json::to_string_pretty(listings)
            .map_err(|e| ServerError::DataError(format!("Serialize failed: {e}")))?;

        let path = self.path_for(category);
        fs::write(&path, json)
            .map_err(|e| ServerError::DataError(format!("Write {} failed: {e}", path.display())))?;

        tracing::info!(
            category = category.label(),
            count = listings.len(),
            path = %path.display(),
            "saved listings"
        );
        Ok(())
    }
}
