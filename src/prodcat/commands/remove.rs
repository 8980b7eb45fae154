use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductId};
use crate::store::DataStore;

use super::helpers::{load_products, LoadPolicy};

/// Drops every product with `id` and rewrites the catalog, whether or not
/// anything matched.
pub fn run<S: DataStore>(store: &mut S, policy: LoadPolicy, id: ProductId) -> Result<CmdResult> {
    let products = load_products(store, policy)?;
    let (removed, kept): (Vec<Product>, Vec<Product>) =
        products.into_iter().partition(|p| p.id == id);
    store.save(&kept)?;

    let mut result = CmdResult::default();
    for product in &removed {
        result.add_message(CmdMessage::success(format!(
            "Product removed ({}): {}",
            product.id, product.title
        )));
    }
    Ok(result.with_affected_products(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_exactly_the_matching_product() {
        let mut store = StoreFixture::new().with_products(3).store;

        let result = run(&mut store, LoadPolicy::Lenient, 1).unwrap();

        let remaining: Vec<_> = store.load().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![2, 3]);
        assert_eq!(result.affected_products.len(), 1);
        assert_eq!(result.affected_products[0].code, "CODE1");
    }

    #[test]
    fn rewrites_even_when_nothing_matches() {
        let mut store = StoreFixture::new().with_products(2).store;
        let before = store.load().unwrap();

        let result = run(&mut store, LoadPolicy::Lenient, 77).unwrap();

        assert!(result.affected_products.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap(), before);
    }
}
