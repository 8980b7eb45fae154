//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the command layer knows about
//! persistence. A store hands back the whole catalog and takes the whole
//! catalog back; there is no partial read or write.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production store, a single JSON array on disk
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! .prodcat/
//! ├── products.json   # JSON array of products (name configurable)
//! └── config.json     # Catalog configuration
//! ```
//!
//! Stores do not lock. Two processes writing the same file race and the
//! last writer wins.

use crate::error::Result;
use crate::model::Product;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Load every product, in stored order.
    ///
    /// A store that has never been written holds an empty catalog. Any
    /// failure to read or decode existing data is returned as an error.
    fn load(&self) -> Result<Vec<Product>>;

    /// Replace the stored catalog with `products`.
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Path of the backing file, for stores that have one.
    fn data_path(&self) -> Option<&Path>;
}
