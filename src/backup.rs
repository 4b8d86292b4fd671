use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{
    default_fitting_config, default_product_hierarchy, Customer, FittingConfig, LedgerEntry,
    MechanicProfile, ProductHierarchy, SaleRecord, WarrantyClaim,
};
use crate::error::{BackupError, StoreError};
use crate::keys;
use crate::shop::ShopStore;

/// Which collections a backup covers.
///
/// `Labour` is the mechanic side (profiles + ledger), `Sales` the customer
/// side (sales + customers + claims), `Full` everything including product
/// and fitting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Full,
    Labour,
    Sales,
}

impl ExportScope {
    fn includes_labour(self) -> bool {
        matches!(self, ExportScope::Full | ExportScope::Labour)
    }

    fn includes_sales(self) -> bool {
        matches!(self, ExportScope::Full | ExportScope::Sales)
    }
}

/// The interchange document: each collection as an optional top-level
/// property, shaped exactly like the stored value.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanics: Option<Vec<MechanicProfile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger: Option<Vec<LedgerEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<SaleRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<Customer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<WarrantyClaim>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProductHierarchy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fittings: Option<FittingConfig>,
}

/// Serialize the scope's collections as a pretty-printed backup document.
/// Absent product/fitting config exports its seeded default, matching what
/// the shop actually operates with.
pub fn export(store: &ShopStore, scope: ExportScope) -> Result<String, StoreError> {
    let mut doc = BackupDocument::default();

    if scope.includes_labour() {
        doc.mechanics = Some(store.read(keys::MECHANICS, Vec::new()));
        doc.ledger = Some(store.read(keys::LEDGER, Vec::new()));
    }
    if scope.includes_sales() {
        doc.sales = Some(store.read(keys::SALES, Vec::new()));
        doc.customers = Some(store.read(keys::CUSTOMERS, Vec::new()));
        doc.claims = Some(store.read(keys::CLAIMS, Vec::new()));
    }
    if scope == ExportScope::Full {
        doc.settings = Some(store.read(keys::SETTINGS, default_product_hierarchy()));
        doc.fittings = Some(store.read(keys::FITTINGS, default_fitting_config()));
    }

    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Apply a backup document: overwrite every collection that is both present
/// in the document and allowed by `scope`, wholesale — no merging. The
/// document is parsed in full before anything is written, so a malformed
/// backup applies nothing. Fires exactly one change broadcast and bypasses
/// the undo log entirely.
pub fn import(store: &ShopStore, json: &str, scope: ExportScope) -> Result<(), BackupError> {
    let doc: BackupDocument = serde_json::from_str(json).map_err(|err| {
        error!(%err, "backup document rejected");
        BackupError::Parse(err.to_string())
    })?;

    apply(store, &doc, scope)?;
    store.notify_change();
    Ok(())
}

fn apply(store: &ShopStore, doc: &BackupDocument, scope: ExportScope) -> Result<(), StoreError> {
    let mut applied = Vec::new();

    if scope.includes_labour() {
        if let Some(mechanics) = &doc.mechanics {
            store.write(keys::MECHANICS, mechanics)?;
            applied.push(keys::MECHANICS);
        }
        if let Some(ledger) = &doc.ledger {
            store.write(keys::LEDGER, ledger)?;
            applied.push(keys::LEDGER);
        }
    }
    if scope.includes_sales() {
        if let Some(sales) = &doc.sales {
            store.write(keys::SALES, sales)?;
            applied.push(keys::SALES);
        }
        if let Some(customers) = &doc.customers {
            store.write(keys::CUSTOMERS, customers)?;
            applied.push(keys::CUSTOMERS);
        }
        if let Some(claims) = &doc.claims {
            store.write(keys::CLAIMS, claims)?;
            applied.push(keys::CLAIMS);
        }
    }
    if scope == ExportScope::Full {
        if let Some(settings) = &doc.settings {
            store.write(keys::SETTINGS, settings)?;
            applied.push(keys::SETTINGS);
        }
        if let Some(fittings) = &doc.fittings {
            store.write(keys::FITTINGS, fittings)?;
            applied.push(keys::FITTINGS);
        }
    }

    debug!(?applied, "backup applied");
    Ok(())
}
