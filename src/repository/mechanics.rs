use std::sync::Arc;

use crate::domain::{new_id, MechanicProfile};
use crate::error::StoreError;
use crate::keys;
use crate::shop::ShopStore;

/// Referring mechanics and their wallet balances.
///
/// Balances only ever move through [`LedgerRepository::post`]; this
/// repository manages the profiles themselves.
///
/// [`LedgerRepository::post`]: crate::repository::LedgerRepository::post
pub struct MechanicRepository {
    store: Arc<ShopStore>,
}

impl MechanicRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        MechanicRepository { store }
    }

    pub fn list(&self) -> Vec<MechanicProfile> {
        self.store.read(keys::MECHANICS, Vec::new())
    }

    pub fn find(&self, id: &str) -> Option<MechanicProfile> {
        self.list().into_iter().find(|m| m.id == id)
    }

    /// Register a mechanic with an empty wallet and return the new profile.
    pub fn create(&self, name: &str, phone: &str) -> Result<MechanicProfile, StoreError> {
        let mechanic = MechanicProfile {
            id: new_id(),
            name: name.to_string(),
            phone: phone.to_string(),
            wallet_balance: 0.0,
        };

        let description = format!("Created Profile: {}", name);
        let stored = mechanic.clone();
        self.store
            .mutate(&description, keys::MECHANICS, move |mut list: Vec<MechanicProfile>| {
                list.push(stored);
                list
            })?;
        Ok(mechanic)
    }

    pub fn update(
        &self,
        id: &str,
        apply: impl FnOnce(&mut MechanicProfile),
    ) -> Result<(), StoreError> {
        self.store.mutate(
            "Updated Profile",
            keys::MECHANICS,
            |mut list: Vec<MechanicProfile>| {
                if let Some(mechanic) = list.iter_mut().find(|m| m.id == id) {
                    apply(mechanic);
                }
                list
            },
        )?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.mutate(
            "Deleted Profile",
            keys::MECHANICS,
            |mut list: Vec<MechanicProfile>| {
                list.retain(|m| m.id != id);
                list
            },
        )?;
        Ok(())
    }
}
