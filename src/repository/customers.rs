use std::sync::Arc;

use crate::domain::Customer;
use crate::error::StoreError;
use crate::keys;
use crate::shop::ShopStore;

/// Customer book: one record per person, vehicles nested inside.
pub struct CustomerRepository {
    store: Arc<ShopStore>,
}

impl CustomerRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        CustomerRepository { store }
    }

    pub fn list(&self) -> Vec<Customer> {
        self.store.read(keys::CUSTOMERS, Vec::new())
    }

    pub fn find_by_phone(&self, phone: &str) -> Option<Customer> {
        self.list().into_iter().find(|c| c.phone == phone)
    }

    pub fn create(&self, customer: Customer) -> Result<(), StoreError> {
        let description = format!("New Customer: {}", customer.name);
        self.store
            .mutate(&description, keys::CUSTOMERS, move |mut list: Vec<Customer>| {
                list.push(customer);
                list
            })?;
        Ok(())
    }

    pub fn update(&self, id: &str, apply: impl FnOnce(&mut Customer)) -> Result<(), StoreError> {
        self.store
            .mutate("Updated Customer", keys::CUSTOMERS, |mut list: Vec<Customer>| {
                if let Some(customer) = list.iter_mut().find(|c| c.id == id) {
                    apply(customer);
                }
                list
            })?;
        Ok(())
    }
}
