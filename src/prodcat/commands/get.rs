use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ProductId;
use crate::store::DataStore;

use super::helpers::{find_by_code, find_by_id, load_products, LoadPolicy};

/// Lists the first product with `id`, or nothing.
pub fn by_id<S: DataStore>(store: &S, policy: LoadPolicy, id: ProductId) -> Result<CmdResult> {
    let products = load_products(store, policy)?;
    let found = find_by_id(&products, id).cloned();
    Ok(CmdResult::default().with_listed_products(found.into_iter().collect()))
}

/// Lists the first product whose code is exactly `code`, or nothing.
pub fn by_code<S: DataStore>(store: &S, policy: LoadPolicy, code: &str) -> Result<CmdResult> {
    let products = load_products(store, policy)?;
    let found = find_by_code(&products, code).cloned();
    Ok(CmdResult::default().with_listed_products(found.into_iter().collect()))
}
