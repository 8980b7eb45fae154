use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{load_products, LoadPolicy};

pub fn run<S: DataStore>(store: &S, policy: LoadPolicy) -> Result<CmdResult> {
    let products = load_products(store, policy)?;
    Ok(CmdResult::default().with_listed_products(products))
}
