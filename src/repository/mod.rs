mod claims;
mod customers;
mod fittings;
mod ledger;
mod mechanics;
mod products;
mod profile;
mod sales;

pub use claims::ClaimRepository;
pub use customers::CustomerRepository;
pub use fittings::FittingRepository;
pub use ledger::LedgerRepository;
pub use mechanics::MechanicRepository;
pub use products::ProductRepository;
pub use profile::ShopProfileRepository;
pub use sales::SaleRepository;
