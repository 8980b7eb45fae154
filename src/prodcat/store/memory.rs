use super::DataStore;
use crate::error::Result;
use crate::model::Product;
use std::path::Path;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the catalog has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn data_path(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewProduct;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Stores `product` as-is, bypassing validation. Resets the save count.
        pub fn with_product(mut self, product: Product) -> Self {
            self.store.products.push(product);
            self.store.saves = 0;
            self
        }

        pub fn with_products(mut self, count: usize) -> Self {
            let start = self.store.products.len();
            for i in start..start + count {
                let n = i + 1;
                let product = NewProduct::new(
                    format!("Product {}", n),
                    format!("Description for product {}", n),
                    n as f64 * 10.0,
                    format!("product{}.jpg", n),
                    format!("CODE{}", n),
                    n as i64,
                )
                .with_id(n as u64);
                self = self.with_product(product);
            }
            self
        }
    }
}
