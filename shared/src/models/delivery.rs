//! Delivery selection models

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Delivery,
    #[default]
    Pickup,
}

impl DeliveryMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivery => "Delivery",
            Self::Pickup => "Pickup",
        }
    }
}

/// Named places an order can be collected from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupLocation {
    #[default]
    #[serde(rename = "The Office Business Center")]
    TheOfficeBusinessCenter,
    #[serde(rename = "Sigma Shopping Center")]
    SigmaShoppingCenter,
}

impl PickupLocation {
    pub const ALL: [PickupLocation; 2] = [
        PickupLocation::TheOfficeBusinessCenter,
        PickupLocation::SigmaShoppingCenter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TheOfficeBusinessCenter => "The Office Business Center",
            Self::SigmaShoppingCenter => "Sigma Shopping Center",
        }
    }
}

impl fmt::Display for PickupLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(DeliveryMethod::default(), DeliveryMethod::Pickup);
        assert_eq!(
            PickupLocation::default(),
            PickupLocation::TheOfficeBusinessCenter
        );
    }

    #[test]
    fn test_pickup_location_names() {
        assert_eq!(
            PickupLocation::TheOfficeBusinessCenter.to_string(),
            "The Office Business Center"
        );
        let json = serde_json::to_string(&PickupLocation::SigmaShoppingCenter).unwrap();
        assert_eq!(json, "\"Sigma Shopping Center\"");
    }
}
