use std::fmt;

use serde::{Deserialize, Serialize};

/// Referring mechanic with a cached wallet balance.
///
/// The balance is denormalized from the ledger: every posting adjusts it in
/// the same history entry, so the pair stays consistent across undo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanicProfile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub wallet_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LedgerEntryType {
    Credit,
    Debit,
    Payout,
}

impl LedgerEntryType {
    /// Credits add to the wallet; debits and payouts take from it.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            LedgerEntryType::Credit => amount,
            LedgerEntryType::Debit | LedgerEntryType::Payout => -amount,
        }
    }
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntryType::Credit => write!(f, "CREDIT"),
            LedgerEntryType::Debit => write!(f, "DEBIT"),
            LedgerEntryType::Payout => write!(f, "PAYOUT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub mechanic_id: String,
    pub date: u64,
    #[serde(rename = "type")]
    pub entry_type: LedgerEntryType,
    pub amount: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

/// Input for a new ledger entry; id and date are assigned at posting time.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerPosting {
    pub mechanic_id: String,
    pub entry_type: LedgerEntryType,
    pub amount: f64,
    pub description: String,
    pub reference_id: Option<String>,
}
