use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One purchasable variant of a brand: wattage, warranty window, and the
/// lamp models it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub wattage: String,
    pub warranty_months: u32,
    pub models: Vec<String>,
}

/// Brand → variants.
pub type ProductHierarchy = BTreeMap<String, Vec<ProductVariant>>;

/// Brand → Model → Variant → fitting description.
pub type FittingConfig = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

fn variant(id: &str, wattage: &str, warranty_months: u32, models: &[&str]) -> ProductVariant {
    ProductVariant {
        id: id.to_string(),
        wattage: wattage.to_string(),
        warranty_months,
        models: models.iter().map(|m| m.to_string()).collect(),
    }
}

/// Catalog the shop starts with before any product config is saved.
pub fn default_product_hierarchy() -> ProductHierarchy {
    let mut hierarchy = ProductHierarchy::new();
    hierarchy.insert(
        "Osram".to_string(),
        vec![
            variant("v1", "100/90W", 12, &["Rally", "Night Breaker"]),
            variant("v2", "60/55W", 6, &["Standard"]),
        ],
    );
    hierarchy.insert(
        "Thor LED".to_string(),
        vec![
            variant("v3", "310W", 24, &["H4", "H7", "H8"]),
            variant("v4", "180W", 12, &["H4"]),
        ],
    );
    hierarchy.insert(
        "RPL LED".to_string(),
        vec![variant("v5", "380W", 24, &["H4", "H7"])],
    );
    hierarchy
}

/// Vehicle fitting database the shop starts with.
pub fn default_fitting_config() -> FittingConfig {
    let mut config = FittingConfig::new();

    let mut scorpio = BTreeMap::new();
    scorpio.insert("M2DI".to_string(), "H4".to_string());
    scorpio.insert(
        "Classic S11".to_string(),
        "H7 (Low) / H7 (High)".to_string(),
    );
    let mut mahindra = BTreeMap::new();
    mahindra.insert("Scorpio".to_string(), scorpio);
    config.insert("Mahindra".to_string(), mahindra);

    let mut swift = BTreeMap::new();
    swift.insert("VXI (Old)".to_string(), "H4".to_string());
    swift.insert("ZXI+ (New)".to_string(), "LED Projector".to_string());
    let mut maruti = BTreeMap::new();
    maruti.insert("Swift".to_string(), swift);
    config.insert("Maruti".to_string(), maruti);

    config
}
