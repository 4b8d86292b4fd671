use serde::{Deserialize, Serialize};

/// The shop's own identity, printed on bills and warranty cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopProfile {
    pub name: String,
    pub mobile1: String,
    pub mobile2: String,
    pub address: String,
    pub slogan: String,
}

impl Default for ShopProfile {
    fn default() -> Self {
        ShopProfile {
            name: "Prince Auto Parts".to_string(),
            mobile1: "9922115982".to_string(),
            mobile2: "99921226321".to_string(),
            address: "Shop no.4, Naaz Complex, Behind Lokmanya Hospital, 80 Feet Road, \
                      Dhule, Maharashtra. 424001."
                .to_string(),
            slogan: "Seller in electrical auto parts".to_string(),
        }
    }
}
