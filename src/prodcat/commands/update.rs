use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{is_valid_price, ProductId, ProductPatch};
use crate::store::DataStore;
use tracing::{debug, info};

use super::helpers::{load_products, LoadPolicy};

/// Merges `patch` into the product with `id` and persists the catalog.
///
/// An unknown id is a no-op: nothing is written and no message is added.
/// A patch with a non-finite price, or one that would give the product
/// another product's code, is rejected.
pub fn run<S: DataStore>(
    store: &mut S,
    policy: LoadPolicy,
    id: ProductId,
    patch: &ProductPatch,
) -> Result<CmdResult> {
    let mut products = load_products(store, policy)?;
    let mut result = CmdResult::default();

    let Some(pos) = products.iter().position(|p| p.id == id) else {
        debug!(id, "update skipped: no such product");
        return Ok(result);
    };

    if let Some(price) = patch.price.filter(|p| !is_valid_price(*p)) {
        info!(id, price, "update rejected: price is not a finite number");
        result.add_message(CmdMessage::warning(format!(
            "Invalid price {}: must be a finite number",
            price
        )));
        return Ok(result);
    }

    if let Some(code) = &patch.code {
        if products.iter().any(|p| p.id != id && &p.code == code) {
            info!(id, code = %code, "update rejected: duplicate code");
            result.add_message(CmdMessage::warning(format!(
                "A product with code {} already exists",
                code
            )));
            return Ok(result);
        }
    }

    patch.apply_to(&mut products[pos]);
    store.save(&products)?;

    let product = products[pos].clone();
    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        product.id, product.title
    )));
    result.affected_products.push(product);
    Ok(result)
}
