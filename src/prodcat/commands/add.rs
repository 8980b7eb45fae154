use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{is_valid_price, IdCounter, ProductDraft};
use crate::store::DataStore;
use tracing::info;

use super::helpers::{find_by_code, load_products, LoadPolicy};

/// Validates `draft` and appends it to the catalog.
///
/// A draft missing required fields, with a non-finite price, or reusing an
/// existing code is rejected with a warning message and nothing is written. The id is only
/// taken from `ids` once the product is accepted.
pub fn run<S: DataStore>(
    store: &mut S,
    policy: LoadPolicy,
    ids: &mut IdCounter,
    draft: ProductDraft,
) -> Result<CmdResult> {
    let mut products = load_products(store, policy)?;
    let mut result = CmdResult::default();

    let new_product = match draft.validate() {
        Ok(new_product) => new_product,
        Err(missing) => {
            let fields = missing.join(", ");
            info!(fields = %fields, "product rejected: missing required fields");
            result.add_message(CmdMessage::warning(format!(
                "Missing required fields: {}",
                fields
            )));
            return Ok(result);
        }
    };

    if !is_valid_price(new_product.price) {
        info!(price = new_product.price, "product rejected: price is not a finite number");
        result.add_message(CmdMessage::warning(format!(
            "Invalid price {}: must be a finite number",
            new_product.price
        )));
        return Ok(result);
    }

    if find_by_code(&products, &new_product.code).is_some() {
        info!(code = %new_product.code, "product rejected: duplicate code");
        result.add_message(CmdMessage::warning(format!(
            "A product with code {} already exists",
            new_product.code
        )));
        return Ok(result);
    }

    let product = new_product.with_id(ids.next_id()?);
    products.push(product.clone());
    store.save(&products)?;

    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id, product.title
    )));
    result.affected_products.push(product);
    Ok(result)
}
