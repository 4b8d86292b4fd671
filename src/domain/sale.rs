use serde::{Deserialize, Serialize};

use super::CustomerType;

/// One fitted item (headlamp/bulb) on a bill, with its warranty window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub id: String,
    pub brand: String,
    pub wattage: String,
    pub model: String,
    pub serial_number: String,
    pub warranty_duration_months: u32,
    pub expiry_date: u64,
    pub bill_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealer_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<f64>,
}

impl SaleItem {
    /// Per-item profit: customer price minus dealer price, when known.
    pub fn margin(&self) -> f64 {
        match self.dealer_price {
            Some(dealer) => self.bill_amount - dealer,
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraCharge {
    pub id: String,
    pub label: String,
    pub amount: f64,
    pub is_included_in_bill: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabourType {
    Fitting,
    Setting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabourProvider {
    Ours,
    Theirs,
    #[serde(rename = "SELF")]
    Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourCost {
    #[serde(rename = "type")]
    pub labour_type: LabourType,
    pub provider: LabourProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub amount: f64,
    pub is_included_in_bill: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    Online,
    #[serde(rename = "UPI")]
    Upi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub billed_amount: f64,
    pub extra_charges: Vec<ExtraCharge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitting_labour: Option<LabourCost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting_labour: Option<LabourCost>,
    pub total_receivable: f64,
    pub received_amount: f64,
    pub balance_amount: f64,
    pub payment_mode: PaymentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_margin: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnStatus {
    AtShop,
    SentToCompany,
    CreditReceived,
}

/// Where a returned item sits in the shop → company → credit-note pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnTracking {
    pub status: ReturnStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_date: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lr_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_date: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_note_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RedemptionType {
    Replacement,
    Refund,
}

/// One warranty redemption against a sold item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRecord {
    pub id: String,
    pub date: u64,
    #[serde(rename = "type")]
    pub redemption_type: RedemptionType,
    pub old_item_serial: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_item_serial: Option<String>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_tracking: Option<ReturnTracking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: String,
    pub bill_number: String,
    pub date: u64,
    pub customer_type: CustomerType,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_margin: Option<f64>,
    pub items: Vec<SaleItem>,
    pub payment_details: PaymentDetails,
    pub total_bill: f64,
    pub redemptions: Vec<RedemptionRecord>,
}

impl SaleRecord {
    /// Sum of per-item margins. The recorded `total_margin` is what drives
    /// the referral credit; this is the figure a wizard would prefill it
    /// with.
    pub fn computed_margin(&self) -> f64 {
        self.items.iter().map(SaleItem::margin).sum()
    }
}
