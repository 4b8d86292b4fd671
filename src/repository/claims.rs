use std::sync::Arc;

use crate::domain::WarrantyClaim;
use crate::error::StoreError;
use crate::keys;
use crate::shop::ShopStore;

/// Warranty claims raised through the replacement workflow.
pub struct ClaimRepository {
    store: Arc<ShopStore>,
}

impl ClaimRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        ClaimRepository { store }
    }

    pub fn list(&self) -> Vec<WarrantyClaim> {
        self.store.read(keys::CLAIMS, Vec::new())
    }

    pub fn create(&self, claim: WarrantyClaim) -> Result<(), StoreError> {
        let description = format!("Claim: {}", claim.status);
        self.store
            .mutate(&description, keys::CLAIMS, move |mut list: Vec<WarrantyClaim>| {
                list.push(claim);
                list
            })?;
        Ok(())
    }
}
