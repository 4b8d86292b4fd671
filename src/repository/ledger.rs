use std::sync::Arc;

use crate::domain::{new_id, now_millis, LedgerEntry, LedgerPosting, MechanicProfile};
use crate::error::StoreError;
use crate::keys;
use crate::shop::ShopStore;

/// Wallet ledger for referring mechanics.
pub struct LedgerRepository {
    store: Arc<ShopStore>,
}

impl LedgerRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        LedgerRepository { store }
    }

    pub fn list(&self) -> Vec<LedgerEntry> {
        self.store.read(keys::LEDGER, Vec::new())
    }

    pub fn for_mechanic(&self, mechanic_id: &str) -> Vec<LedgerEntry> {
        self.list()
            .into_iter()
            .filter(|entry| entry.mechanic_id == mechanic_id)
            .collect()
    }

    /// Append a ledger entry and adjust the mechanic's cached wallet
    /// balance in the same history entry, so undoing the posting restores
    /// both. A posting for an unknown mechanic still lands in the ledger;
    /// no balance moves.
    pub fn post(&self, posting: LedgerPosting) -> Result<LedgerEntry, StoreError> {
        let entry = LedgerEntry {
            id: new_id(),
            mechanic_id: posting.mechanic_id,
            date: now_millis(),
            entry_type: posting.entry_type,
            amount: posting.amount,
            description: posting.description,
            reference_id: posting.reference_id,
        };

        let description = format!("Ledger: {} ₹{}", entry.entry_type, entry.amount);
        self.store.transaction(&description, |txn| {
            txn.mutate(keys::LEDGER, |mut list: Vec<LedgerEntry>| {
                list.push(entry.clone());
                list
            })?;
            txn.mutate(keys::MECHANICS, |mut mechanics: Vec<MechanicProfile>| {
                if let Some(mechanic) = mechanics.iter_mut().find(|m| m.id == entry.mechanic_id) {
                    mechanic.wallet_balance += entry.entry_type.signed(entry.amount);
                }
                mechanics
            })?;
            Ok(())
        })?;

        Ok(entry)
    }
}
