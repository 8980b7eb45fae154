use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{IdCounter, NewProduct};
use crate::store::DataStore;

use super::add;
use super::helpers::LoadPolicy;

/// The three products of the sample catalog.
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Leche", "Leche descremada", 250.0, "imagen1.jpg", "ASDF12", 115),
        NewProduct::new("Cafe", "Café tostado", 1500.0, "imagen2.jpg", "BVCD15", 120),
        NewProduct::new("Té", "Té de hierbas", 160.0, "imagen3.jpg", "BVSB16", 100),
    ]
}

/// Adds the sample products through the regular add path, so codes already
/// present are skipped with a warning.
pub fn run<S: DataStore>(
    store: &mut S,
    policy: LoadPolicy,
    ids: &mut IdCounter,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for product in sample_products() {
        result.merge(add::run(store, policy, ids, product.into())?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_three_products() {
        let mut store = InMemoryStore::new();
        let mut ids = IdCounter::new();

        let result = run(&mut store, LoadPolicy::Lenient, &mut ids).unwrap();

        let ids: Vec<_> = result.affected_products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test]
    fn seeding_twice_adds_nothing_new() {
        let mut store = InMemoryStore::new();
        let mut ids = IdCounter::new();
        run(&mut store, LoadPolicy::Lenient, &mut ids).unwrap();

        let result = run(&mut store, LoadPolicy::Lenient, &mut ids).unwrap();

        assert!(result.affected_products.is_empty());
        assert_eq!(result.messages.len(), 3);
        assert!(result.has_warnings());
        assert_eq!(store.load().unwrap().len(), 3);
    }
}
