mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use shopledger::{
    ClaimRepository, CustomerRepository, CustomerType, FittingRepository, LedgerEntryType,
    LedgerPosting, LedgerRepository, MechanicRepository, ProductRepository, SaleRepository,
    ShopProfileRepository, ShopStore,
};
use support::{claim, customer, direct_sale, redemption, referred_sale};

fn shop() -> Arc<ShopStore> {
    Arc::new(ShopStore::in_memory())
}

#[test]
fn mechanic_referred_sale_posts_margin_credit() {
    let store = shop();
    let mechanics = MechanicRepository::new(Arc::clone(&store));
    let sales = SaleRepository::new(Arc::clone(&store));
    let ledger = LedgerRepository::new(Arc::clone(&store));

    let raju = mechanics.create("Raju", "9900000002").unwrap();
    assert_eq!(raju.wallet_balance, 0.0);

    let count = support::broadcast_counter(&store);
    let sale = referred_sale("101", &raju.id, 500.0);
    let sale_id = sale.id.clone();
    sales.create(sale).unwrap();

    // Sale and ledger posting are two independent entries and broadcasts.
    assert_eq!(count.load(Ordering::SeqCst), 2);

    let entries = ledger.for_mechanic(&raju.id);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entry_type, LedgerEntryType::Credit);
    assert_eq!(entries[0].amount, 500.0);
    assert_eq!(entries[0].reference_id.as_deref(), Some(sale_id.as_str()));
    assert_eq!(entries[0].description, "Margin for Bill #101");

    assert_eq!(mechanics.find(&raju.id).unwrap().wallet_balance, 500.0);

    let history = store.history();
    assert_eq!(history[0].description, "Ledger: CREDIT ₹500");
    assert_eq!(history[1].description, "New Sale: #101");
    assert_eq!(history[2].description, "Created Profile: Raju");

    // One toast at a time: the ledger posting's toast is the visible one.
    assert_eq!(store.toast().unwrap().message, "Ledger: CREDIT ₹500");
}

#[test]
fn direct_sale_posts_no_credit() {
    let store = shop();
    let sales = SaleRepository::new(Arc::clone(&store));
    let ledger = LedgerRepository::new(Arc::clone(&store));

    sales.create(direct_sale("102")).unwrap();

    assert!(ledger.list().is_empty());
    assert_eq!(store.history().len(), 1);
    assert_eq!(store.history()[0].description, "New Sale: #102");
}

#[test]
fn referred_sale_without_margin_posts_no_credit() {
    let store = shop();
    let mechanics = MechanicRepository::new(Arc::clone(&store));
    let sales = SaleRepository::new(Arc::clone(&store));

    let raju = mechanics.create("Raju", "9900000002").unwrap();
    let mut sale = referred_sale("103", &raju.id, 0.0);
    sale.total_margin = Some(0.0);
    sales.create(sale).unwrap();

    assert!(LedgerRepository::new(Arc::clone(&store)).list().is_empty());
    assert_eq!(mechanics.find(&raju.id).unwrap().wallet_balance, 0.0);
}

#[test]
fn undoing_a_ledger_posting_restores_the_wallet_balance() {
    let store = shop();
    let mechanics = MechanicRepository::new(Arc::clone(&store));
    let ledger = LedgerRepository::new(Arc::clone(&store));

    let raju = mechanics.create("Raju", "9900000002").unwrap();
    ledger
        .post(LedgerPosting {
            mechanic_id: raju.id.clone(),
            entry_type: LedgerEntryType::Credit,
            amount: 500.0,
            description: "Margin for Bill #101".to_string(),
            reference_id: None,
        })
        .unwrap();
    assert_eq!(mechanics.find(&raju.id).unwrap().wallet_balance, 500.0);

    let posting_entry = store.history()[0].id;
    store.undo(posting_entry).unwrap();

    // Ledger row and balance adjustment undo together.
    assert!(ledger.list().is_empty());
    assert_eq!(mechanics.find(&raju.id).unwrap().wallet_balance, 0.0);

    // And redo brings both back.
    store.invoke_toast_action().unwrap();
    assert_eq!(ledger.list().len(), 1);
    assert_eq!(mechanics.find(&raju.id).unwrap().wallet_balance, 500.0);
}

#[test]
fn undoing_the_sale_leaves_the_credit_entry_alone() {
    let store = shop();
    let mechanics = MechanicRepository::new(Arc::clone(&store));
    let sales = SaleRepository::new(Arc::clone(&store));
    let ledger = LedgerRepository::new(Arc::clone(&store));

    let raju = mechanics.create("Raju", "9900000002").unwrap();
    sales.create(referred_sale("101", &raju.id, 500.0)).unwrap();

    let sale_entry = store
        .history()
        .into_iter()
        .find(|summary| summary.description == "New Sale: #101")
        .unwrap();
    store.undo(sale_entry.id).unwrap();

    // The sale and its credit are deliberately separate entries.
    assert!(sales.list().is_empty());
    assert_eq!(ledger.list().len(), 1);
    assert_eq!(mechanics.find(&raju.id).unwrap().wallet_balance, 500.0);
}

#[test]
fn payout_reduces_the_wallet() {
    let store = shop();
    let mechanics = MechanicRepository::new(Arc::clone(&store));
    let ledger = LedgerRepository::new(Arc::clone(&store));

    let raju = mechanics.create("Raju", "9900000002").unwrap();
    for (entry_type, amount) in [
        (LedgerEntryType::Credit, 800.0),
        (LedgerEntryType::Payout, 300.0),
    ] {
        ledger
            .post(LedgerPosting {
                mechanic_id: raju.id.clone(),
                entry_type,
                amount,
                description: "settlement".to_string(),
                reference_id: None,
            })
            .unwrap();
    }

    assert_eq!(mechanics.find(&raju.id).unwrap().wallet_balance, 500.0);
    assert_eq!(store.history()[0].description, "Ledger: PAYOUT ₹300");
}

#[test]
fn posting_for_unknown_mechanic_only_hits_the_ledger() {
    let store = shop();
    let ledger = LedgerRepository::new(Arc::clone(&store));

    ledger
        .post(LedgerPosting {
            mechanic_id: "ghost".to_string(),
            entry_type: LedgerEntryType::Credit,
            amount: 100.0,
            description: "orphan".to_string(),
            reference_id: None,
        })
        .unwrap();

    assert_eq!(ledger.list().len(), 1);
    assert!(MechanicRepository::new(Arc::clone(&store)).list().is_empty());
}

#[test]
fn customer_lifecycle() {
    let store = shop();
    let customers = CustomerRepository::new(Arc::clone(&store));

    customers
        .create(customer("Asha", "9900000001", CustomerType::Direct))
        .unwrap();
    let asha = customers.find_by_phone("9900000001").unwrap();

    customers
        .update(&asha.id, |c| {
            c.address = Some("80 Feet Road, Dhule".to_string());
        })
        .unwrap();
    assert_eq!(
        customers.find_by_phone("9900000001").unwrap().address.as_deref(),
        Some("80 Feet Road, Dhule")
    );

    assert_eq!(store.history()[0].description, "Updated Customer");
    assert_eq!(store.history()[1].description, "New Customer: Asha");
}

#[test]
fn mechanic_delete_is_undoable() {
    let store = shop();
    let mechanics = MechanicRepository::new(Arc::clone(&store));

    let raju = mechanics.create("Raju", "9900000002").unwrap();
    mechanics.delete(&raju.id).unwrap();
    assert!(mechanics.list().is_empty());
    assert_eq!(store.history()[0].description, "Deleted Profile");

    store.undo(store.history()[0].id).unwrap();
    assert_eq!(mechanics.list().len(), 1);
    assert_eq!(mechanics.list()[0].name, "Raju");
}

#[test]
fn sale_redemption_and_claim_flow() {
    let store = shop();
    let sales = SaleRepository::new(Arc::clone(&store));
    let claims = ClaimRepository::new(Arc::clone(&store));

    let sale = direct_sale("104");
    let sale_id = sale.id.clone();
    sales.create(sale).unwrap();

    claims.create(claim(&sale_id, "SN-1")).unwrap();
    assert_eq!(store.history()[0].description, "Claim: PENDING");

    sales
        .add_redemption(&sale_id, redemption("SN-1", "SN-2"))
        .unwrap();

    let stored = sales.get(&sale_id).unwrap();
    assert_eq!(stored.redemptions.len(), 1);
    assert_eq!(
        stored.redemptions[0].new_item_serial.as_deref(),
        Some("SN-2")
    );
    assert_eq!(claims.list()[0].original_sale_id, sale_id);
}

#[test]
fn product_and_fitting_config_round_trip() {
    let store = shop();
    let products = ProductRepository::new(Arc::clone(&store));
    let fittings = FittingRepository::new(Arc::clone(&store));

    // Unsaved stores serve the seeded defaults.
    let mut hierarchy = products.hierarchy();
    assert!(hierarchy.contains_key("Osram"));
    let mut config = fittings.config();
    assert_eq!(config["Maruti"]["Swift"]["VXI (Old)"], "H4");

    hierarchy.remove("Osram");
    products.save(hierarchy.clone()).unwrap();
    assert_eq!(products.hierarchy(), hierarchy);
    assert_eq!(store.history()[0].description, "Updated Product Config");

    config
        .entry("Tata".to_string())
        .or_default()
        .entry("Nexon".to_string())
        .or_default()
        .insert("XZ+".to_string(), "LED Projector".to_string());
    fittings.save(config.clone()).unwrap();
    assert_eq!(fittings.config(), config);
    assert_eq!(store.history()[0].description, "Updated Fitting Database");

    // Undoing the config save falls back to the saved-before state.
    store.undo(store.history()[0].id).unwrap();
    assert!(!fittings.config().contains_key("Tata"));
}

#[test]
fn shop_profile_updates_bypass_history() {
    let store = shop();
    let profile = ShopProfileRepository::new(Arc::clone(&store));
    let count = support::broadcast_counter(&store);

    assert_eq!(profile.get().name, "Prince Auto Parts");

    let updated = profile
        .update(|p| {
            p.slogan = "All auto electricals under one roof".to_string();
        })
        .unwrap();
    assert_eq!(updated.slogan, "All auto electricals under one roof");
    assert_eq!(profile.get(), updated);

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(store.history().is_empty());
    assert!(store.toast().is_none());
}
