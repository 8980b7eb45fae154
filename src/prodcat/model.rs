use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// JSON has no representation for NaN or infinity; `serde_json` writes them
/// as `null`, which the catalog can no longer read back.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite()
}

/// A catalog entry as it is stored in the backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Path or URL of the product image.
    pub thumbnail: String,
    /// Unique among all products in a catalog.
    pub code: String,
    pub stock: i64,
}

/// A product that has passed validation but has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: i64,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock,
        }
    }

    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

/// Candidate product handed to `add`. Fields are optional so that presence
/// can be checked; an absent or `null` JSON field counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<i64>,
}

impl ProductDraft {
    pub const REQUIRED_FIELDS: [&'static str; 6] =
        ["title", "description", "price", "thumbnail", "code", "stock"];

    /// Names of the required fields this draft lacks, in declaration order.
    ///
    /// A key given as JSON `null` deserializes to `None` and so counts as missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.title.is_some(),
            self.description.is_some(),
            self.price.is_some(),
            self.thumbnail.is_some(),
            self.code.is_some(),
            self.stock.is_some(),
        ];
        Self::REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Turns a complete draft into a [`NewProduct`], or reports what is missing.
    pub fn validate(self) -> std::result::Result<NewProduct, Vec<&'static str>> {
        let missing = self.missing_fields();
        match self {
            ProductDraft {
                title: Some(title),
                description: Some(description),
                price: Some(price),
                thumbnail: Some(thumbnail),
                code: Some(code),
                stock: Some(stock),
            } => Ok(NewProduct {
                title,
                description,
                price,
                thumbnail,
                code,
                stock,
            }),
            _ => Err(missing),
        }
    }

    /// Fills every field still unset from `other`.
    pub fn or(self, other: ProductDraft) -> Self {
        Self {
            title: self.title.or(other.title),
            description: self.description.or(other.description),
            price: self.price.or(other.price),
            thumbnail: self.thumbnail.or(other.thumbnail),
            code: self.code.or(other.code),
            stock: self.stock.or(other.stock),
        }
    }
}

impl From<NewProduct> for ProductDraft {
    fn from(p: NewProduct) -> Self {
        Self {
            title: Some(p.title),
            description: Some(p.description),
            price: Some(p.price),
            thumbnail: Some(p.thumbnail),
            code: Some(p.code),
            stock: Some(p.stock),
        }
    }
}

/// Partial field set merged into an existing product by `update`.
///
/// `None` keeps the current value. The id is not part of a patch, and
/// unknown keys are rejected when a patch is read from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<i64>,
}

impl ProductPatch {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fills every field still unset from `other`.
    pub fn or(self, other: ProductPatch) -> Self {
        Self {
            title: self.title.or(other.title),
            description: self.description.or(other.description),
            price: self.price.or(other.price),
            thumbnail: self.thumbnail.or(other.thumbnail),
            code: self.code.or(other.code),
            stock: self.stock.or(other.stock),
        }
    }

    /// Shallow merge: every field set in the patch overwrites the product's.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(thumbnail) = &self.thumbnail {
            product.thumbnail = thumbnail.clone();
        }
        if let Some(code) = &self.code {
            product.code = code.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

/// Hands out sequential product ids.
///
/// Lives only in memory: a fresh counter starts over at 1 unless it is
/// seeded from the products already stored (see [`IdCounter::after`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: ProductId,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: ProductId) -> Self {
        Self { next: first }
    }

    /// A counter that continues after the highest id in `products`.
    pub fn after(products: &[Product]) -> Result<Self> {
        let highest = products.iter().map(|p| p.id).max().unwrap_or(0);
        let next = highest
            .checked_add(1)
            .ok_or(CatalogError::IdsExhausted(highest))?;
        Ok(Self::starting_at(next))
    }

    /// Hands out the current id. `ProductId::MAX` is never handed out, so the
    /// counter can always advance past the id it returns.
    pub fn next_id(&mut self) -> Result<ProductId> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(CatalogError::IdsExhausted(id))?;
        Ok(id)
    }

    /// The id the next call to [`IdCounter::next_id`] will return.
    pub fn peek(&self) -> ProductId {
        self.next
    }
}
