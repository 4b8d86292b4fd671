//! Stable storage keys for the persisted collections.
//!
//! Key names are part of the external interface: backup documents use the
//! same names as top-level properties, so they must not change.

pub const SALES: &str = "sales";
pub const MECHANICS: &str = "mechanics";
pub const LEDGER: &str = "ledger";
pub const SETTINGS: &str = "settings";
pub const FITTINGS: &str = "fittings";
pub const CUSTOMERS: &str = "customers";
pub const CLAIMS: &str = "claims";
pub const SHOP_PROFILE: &str = "shop_profile";
