use crate::error::Result;
use crate::model::{Product, ProductId};
use crate::store::DataStore;
use tracing::warn;

/// How a failure to read the backing data is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log the failure and carry on with an empty catalog.
    #[default]
    Lenient,
    /// Return the failure to the caller.
    Strict,
}

pub fn load_products<S: DataStore>(store: &S, policy: LoadPolicy) -> Result<Vec<Product>> {
    match store.load() {
        Ok(products) => Ok(products),
        Err(e) if policy == LoadPolicy::Lenient => {
            warn!("could not read catalog, treating it as empty: {}", e);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

pub fn find_by_id(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

pub fn find_by_code<'a>(products: &'a [Product], code: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    fn corrupt_store(dir: &TempDir) -> FileStore {
        let path = dir.path().join("products.json");
        std::fs::write(&path, "not json at all").unwrap();
        FileStore::new(path)
    }

    #[test]
    fn lenient_load_absorbs_read_failure() {
        let dir = TempDir::new().unwrap();
        let store = corrupt_store(&dir);
        let products = load_products(&store, LoadPolicy::Lenient).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn strict_load_surfaces_read_failure() {
        let dir = TempDir::new().unwrap();
        let store = corrupt_store(&dir);
        let err = load_products(&store, LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }

    #[test]
    fn finds_first_match() {
        let store = StoreFixture::new().with_products(3).store;
        let products = store.load().unwrap();

        assert_eq!(find_by_id(&products, 2).unwrap().code, "CODE2");
        assert_eq!(find_by_code(&products, "CODE3").unwrap().id, 3);
        assert!(find_by_id(&products, 9).is_none());
        assert!(find_by_code(&products, "code3").is_none());
    }
}
