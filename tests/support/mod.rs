#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shopledger::{
    new_id, now_millis, ClaimStatus, Customer, CustomerType, DamageType, PaymentDetails,
    PaymentMode, RedemptionRecord, RedemptionType, SaleItem, SaleRecord, ShopStore, WarrantyClaim,
};

pub fn customer(name: &str, phone: &str, customer_type: CustomerType) -> Customer {
    Customer {
        id: new_id(),
        name: name.to_string(),
        phone: phone.to_string(),
        address: None,
        customer_type,
        vehicles: Vec::new(),
        registered_date: now_millis(),
    }
}

pub fn sale_item(serial: &str, bill: f64, dealer: f64) -> SaleItem {
    SaleItem {
        id: new_id(),
        brand: "Osram".to_string(),
        wattage: "100/90W".to_string(),
        model: "Rally".to_string(),
        serial_number: serial.to_string(),
        warranty_duration_months: 12,
        expiry_date: now_millis(),
        bill_amount: bill,
        dealer_price: Some(dealer),
        extras: None,
    }
}

fn payment(total: f64) -> PaymentDetails {
    PaymentDetails {
        billed_amount: total,
        extra_charges: Vec::new(),
        fitting_labour: None,
        setting_labour: None,
        total_receivable: total,
        received_amount: total,
        balance_amount: 0.0,
        payment_mode: PaymentMode::Cash,
        referrer_name: None,
        referrer_margin: None,
    }
}

pub fn direct_sale(bill_number: &str) -> SaleRecord {
    SaleRecord {
        id: new_id(),
        bill_number: bill_number.to_string(),
        date: now_millis(),
        customer_type: CustomerType::Direct,
        customer_id: new_id(),
        customer_name: "Asha".to_string(),
        customer_phone: "9900000001".to_string(),
        customer_address: None,
        vehicle_id: None,
        vehicle_str: Some("Maruti Swift VXI (Old)".to_string()),
        mechanic_id: None,
        total_margin: None,
        items: vec![sale_item("SN-1", 1500.0, 1000.0)],
        payment_details: payment(1500.0),
        total_bill: 1500.0,
        redemptions: Vec::new(),
    }
}

pub fn referred_sale(bill_number: &str, mechanic_id: &str, margin: f64) -> SaleRecord {
    let mut sale = direct_sale(bill_number);
    sale.customer_type = CustomerType::MechanicReferred;
    sale.mechanic_id = Some(mechanic_id.to_string());
    sale.total_margin = Some(margin);
    sale
}

pub fn claim(sale_id: &str, serial: &str) -> WarrantyClaim {
    WarrantyClaim {
        id: new_id(),
        original_sale_id: sale_id.to_string(),
        item_serial: serial.to_string(),
        claim_date: now_millis(),
        status: ClaimStatus::Pending,
        damage_type: DamageType::InternalFailure,
        notes: "flickers at high beam".to_string(),
    }
}

pub fn redemption(old_serial: &str, new_serial: &str) -> RedemptionRecord {
    RedemptionRecord {
        id: new_id(),
        date: now_millis(),
        redemption_type: RedemptionType::Replacement,
        old_item_serial: old_serial.to_string(),
        new_item_serial: Some(new_serial.to_string()),
        reason: "internal failure within warranty".to_string(),
        notes: None,
        return_tracking: None,
    }
}

/// Counts change broadcasts delivered to a subscriber.
pub fn broadcast_counter(store: &ShopStore) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let count_in = Arc::clone(&count);
    store.subscribe(move || {
        count_in.fetch_add(1, Ordering::SeqCst);
    });
    count
}
