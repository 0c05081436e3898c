//! The product catalog.

use std::collections::BTreeMap;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Products keyed by id, iterated in id order.
///
/// Every product is priced in the catalog's currency.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    currency: Currency,
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            products: BTreeMap::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Insert a product, replacing any existing product with the same id.
    ///
    /// Returns the replaced product, if any. Fails if the product is priced
    /// in another currency.
    pub fn upsert(&mut self, product: Product) -> Result<Option<Product>, CommerceError> {
        if product.price.currency != self.currency {
            return Err(CommerceError::InvalidProduct(format!(
                "price is in {}, catalog uses {}",
                product.price.currency, self.currency
            )));
        }
        Ok(self.products.insert(product.id, product))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Look up a product, failing with [`CommerceError::ProductNotFound`].
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.products
            .get(&id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    pub(crate) fn require_mut(&mut self, id: ProductId) -> Result<&mut Product, CommerceError> {
        self.products
            .get_mut(&id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}
