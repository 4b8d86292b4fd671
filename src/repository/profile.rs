use std::sync::Arc;

use crate::domain::ShopProfile;
use crate::error::StoreError;
use crate::keys;
use crate::shop::ShopStore;

/// The shop's own details. Edits are rare and cosmetic, so they write
/// directly — no history entry — and broadcast for any open view.
pub struct ShopProfileRepository {
    store: Arc<ShopStore>,
}

impl ShopProfileRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        ShopProfileRepository { store }
    }

    pub fn get(&self) -> ShopProfile {
        self.store.read(keys::SHOP_PROFILE, ShopProfile::default())
    }

    pub fn update(&self, apply: impl FnOnce(&mut ShopProfile)) -> Result<ShopProfile, StoreError> {
        let mut profile = self.get();
        apply(&mut profile);
        self.store.write(keys::SHOP_PROFILE, &profile)?;
        self.store.notify_change();
        Ok(profile)
    }
}
