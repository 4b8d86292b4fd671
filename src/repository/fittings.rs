use std::sync::Arc;

use crate::domain::{default_fitting_config, FittingConfig};
use crate::error::StoreError;
use crate::keys;
use crate::shop::ShopStore;

/// Vehicle fitting database (brand → model → variant → lamp fitting).
pub struct FittingRepository {
    store: Arc<ShopStore>,
}

impl FittingRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        FittingRepository { store }
    }

    pub fn config(&self) -> FittingConfig {
        self.store.read(keys::FITTINGS, default_fitting_config())
    }

    pub fn save(&self, config: FittingConfig) -> Result<(), StoreError> {
        self.store
            .mutate("Updated Fitting Database", keys::FITTINGS, move |_: FittingConfig| {
                config
            })?;
        Ok(())
    }
}
