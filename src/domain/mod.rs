mod claim;
mod customer;
mod mechanic;
mod product;
mod profile;
mod sale;

pub use claim::{ClaimStatus, DamageType, WarrantyClaim};
pub use customer::{Customer, CustomerType, Vehicle};
pub use mechanic::{LedgerEntry, LedgerEntryType, LedgerPosting, MechanicProfile};
pub use product::{
    default_fitting_config, default_product_hierarchy, FittingConfig, ProductHierarchy,
    ProductVariant,
};
pub use profile::ShopProfile;
pub use sale::{
    ExtraCharge, LabourCost, LabourProvider, LabourType, PaymentDetails, PaymentMode,
    RedemptionRecord, RedemptionType, ReturnStatus, ReturnTracking, SaleItem, SaleRecord,
};

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as epoch milliseconds — the timestamp unit every persisted
/// record uses.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
