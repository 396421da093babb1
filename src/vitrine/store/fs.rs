use super::DataStore;
use crate::error::{Result, VitrineError};
use crate::model::Catalog;
use std::fs;
use std::path::{Path, PathBuf};

pub const CATALOG_FILENAME: &str = "catalog.json";

/// Stores the catalog as `catalog.json` in a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(VitrineError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(Catalog::default());
        }
        let content = fs::read_to_string(&path).map_err(VitrineError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(VitrineError::Serialization)?;
        Ok(catalog)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(catalog).map_err(VitrineError::Serialization)?;
        fs::write(self.catalog_path(), content).map_err(VitrineError::Io)?;
        Ok(())
    }
}
