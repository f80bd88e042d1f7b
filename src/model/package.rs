//! Catering packages and the reservation-deposit arithmetic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringPackage {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Guest range shown to customers, e.g. "25-30 people".
    pub pax: String,
    pub features: Vec<String>,
    pub popular: bool,
}

/// Package catalog consulted by the booking actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageCatalog {
    packages: Vec<CateringPackage>,
}

impl PackageCatalog {
    pub fn new(packages: Vec<CateringPackage>) -> Self {
        Self { packages }
    }

    pub fn find(&self, id: &str) -> Option<&CateringPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn packages(&self) -> &[CateringPackage] {
        &self.packages
    }
}

fn package(id: &str, name: &str, price: f64, pax: &str, features: &[&str], popular: bool) -> CateringPackage {
    CateringPackage {
        id: id.to_string(),
        name: name.to_string(),
        price,
        pax: pax.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        popular,
    }
}

impl Default for PackageCatalog {
    fn default() -> Self {
        Self::new(vec![
            package(
                "intimate",
                "Intimate Gathering",
                2500.0,
                "10-15 people",
                &[
                    "3 Main Dishes",
                    "2 Side Dishes",
                    "Rice for all",
                    "Disposable plates & utensils",
                    "Free delivery within 5km",
                ],
                false,
            ),
            package(
                "celebration",
                "Celebration Package",
                5800.0,
                "25-30 people",
                &[
                    "5 Main Dishes",
                    "3 Side Dishes",
                    "Rice for all",
                    "Dessert included",
                    "Proper serving utensils",
                    "Free delivery within 10km",
                ],
                true,
            ),
            package(
                "grand",
                "Grand Feast",
                12000.0,
                "50-60 people",
                &[
                    "8 Main Dishes",
                    "5 Side Dishes",
                    "Rice for all",
                    "2 Dessert options",
                    "Complete serving setup",
                    "Free delivery anywhere in Metro Manila",
                    "Dedicated service staff",
                ],
                false,
            ),
        ])
    }
}

/// Deposit owed up front: `round(total × rate)`.
pub fn deposit_amount(total: f64, rate: f64) -> f64 {
    (total * rate).round()
}
