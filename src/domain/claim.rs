use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Void,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimStatus::Pending => write!(f, "PENDING"),
            ClaimStatus::Approved => write!(f, "APPROVED"),
            ClaimStatus::Rejected => write!(f, "REJECTED"),
            ClaimStatus::Void => write!(f, "VOID"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DamageType {
    Physical,
    WireCut,
    BrokenGlass,
    InternalFailure,
}

/// Warranty claim raised against an item on a past sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaim {
    pub id: String,
    pub original_sale_id: String,
    pub item_serial: String,
    pub claim_date: u64,
    pub status: ClaimStatus,
    pub damage_type: DamageType,
    pub notes: String,
}
