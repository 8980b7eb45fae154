use super::DataStore;
use crate::error::{CatalogError, Result};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no catalog file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        debug!(path = %self.path.display(), count = products.len(), "loaded catalog");
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(products).map_err(CatalogError::Serialization)?;
        fs::write(&self.path, content).map_err(CatalogError::Io)?;
        debug!(path = %self.path.display(), count = products.len(), "saved catalog");
        Ok(())
    }

    fn data_path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
