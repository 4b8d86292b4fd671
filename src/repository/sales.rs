use std::sync::Arc;

use crate::domain::{
    CustomerType, LedgerEntryType, LedgerPosting, RedemptionRecord, SaleRecord,
};
use crate::error::StoreError;
use crate::keys;
use crate::repository::LedgerRepository;
use crate::shop::ShopStore;

/// Point-of-sale records, including their warranty redemptions.
pub struct SaleRepository {
    store: Arc<ShopStore>,
}

impl SaleRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        SaleRepository { store }
    }

    pub fn list(&self) -> Vec<SaleRecord> {
        self.store.read(keys::SALES, Vec::new())
    }

    pub fn get(&self, id: &str) -> Option<SaleRecord> {
        self.list().into_iter().find(|s| s.id == id)
    }

    /// Record a sale. A mechanic-referred sale with a non-zero margin also
    /// posts a CREDIT to that mechanic's ledger — a second, independent
    /// history entry with its own broadcast, so the sale and the credit
    /// undo separately.
    pub fn create(&self, sale: SaleRecord) -> Result<(), StoreError> {
        let description = format!("New Sale: #{}", sale.bill_number);
        let referral = referral_credit(&sale);

        self.store
            .mutate(&description, keys::SALES, move |mut list: Vec<SaleRecord>| {
                list.push(sale);
                list
            })?;

        if let Some(posting) = referral {
            LedgerRepository::new(Arc::clone(&self.store)).post(posting)?;
        }
        Ok(())
    }

    pub fn update(&self, id: &str, apply: impl FnOnce(&mut SaleRecord)) -> Result<(), StoreError> {
        self.store
            .mutate("Updated Sale", keys::SALES, |mut list: Vec<SaleRecord>| {
                if let Some(sale) = list.iter_mut().find(|s| s.id == id) {
                    apply(sale);
                }
                list
            })?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store
            .mutate("Deleted Sale", keys::SALES, |mut list: Vec<SaleRecord>| {
                list.retain(|s| s.id != id);
                list
            })?;
        Ok(())
    }

    /// Attach a replacement/refund redemption to an existing sale.
    pub fn add_redemption(
        &self,
        sale_id: &str,
        redemption: RedemptionRecord,
    ) -> Result<(), StoreError> {
        self.update(sale_id, |sale| {
            sale.redemptions.push(redemption);
        })
    }
}

fn referral_credit(sale: &SaleRecord) -> Option<LedgerPosting> {
    if sale.customer_type != CustomerType::MechanicReferred {
        return None;
    }
    let mechanic_id = sale.mechanic_id.clone()?;
    let margin = sale.total_margin.filter(|margin| *margin != 0.0)?;

    Some(LedgerPosting {
        mechanic_id,
        entry_type: LedgerEntryType::Credit,
        amount: margin,
        description: format!("Margin for Bill #{}", sale.bill_number),
        reference_id: Some(sale.id.clone()),
    })
}
