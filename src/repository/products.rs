use std::sync::Arc;

use crate::domain::{default_product_hierarchy, ProductHierarchy};
use crate::error::StoreError;
use crate::keys;
use crate::shop::ShopStore;

/// Product catalog (brand → variants). Saved wholesale from the config
/// screen, so there is no per-record API.
pub struct ProductRepository {
    store: Arc<ShopStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        ProductRepository { store }
    }

    pub fn hierarchy(&self) -> ProductHierarchy {
        self.store.read(keys::SETTINGS, default_product_hierarchy())
    }

    pub fn save(&self, hierarchy: ProductHierarchy) -> Result<(), StoreError> {
        self.store
            .mutate("Updated Product Config", keys::SETTINGS, move |_: ProductHierarchy| {
                hierarchy
            })?;
        Ok(())
    }
}
