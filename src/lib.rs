mod backup;
mod broadcast;
mod domain;
mod error;
mod history;
pub mod keys;
mod repository;
mod shop;
mod store;
mod toast;

pub use backup::{export, import, BackupDocument, ExportScope};
pub use broadcast::{ChangeBroadcaster, SubscriptionId};
pub use domain::{
    default_fitting_config, default_product_hierarchy, new_id, now_millis, ClaimStatus, Customer,
    CustomerType, DamageType, ExtraCharge, FittingConfig, LabourCost, LabourProvider, LabourType,
    LedgerEntry, LedgerEntryType, LedgerPosting, MechanicProfile, PaymentDetails, PaymentMode,
    ProductHierarchy, ProductVariant, RedemptionRecord, RedemptionType, ReturnStatus,
    ReturnTracking, SaleItem, SaleRecord, ShopProfile, Vehicle, WarrantyClaim,
};
pub use error::{BackupError, StoreError};
pub use history::{HistoryEntry, HistoryLog, HistorySummary, KeyChange};
pub use repository::{
    ClaimRepository, CustomerRepository, FittingRepository, LedgerRepository, MechanicRepository,
    ProductRepository, SaleRepository, ShopProfileRepository,
};
pub use shop::{ShopStore, StoreConfig, Transaction};
pub use store::{FileBackend, MemoryBackend, StorageBackend};
pub use toast::{Toast, ToastKind, ToastPresenter, ToastView};
