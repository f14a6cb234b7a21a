//! Customer details model

use serde::{Deserialize, Serialize};

/// Contact and delivery details typed into the order form
///
/// Free text, accepted as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Addressable field of [`UserDetails`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Name,
    Phone,
    Address,
}

impl UserField {
    pub const ALL: [UserField; 3] = [UserField::Name, UserField::Phone, UserField::Address];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Address => "Address",
        }
    }
}

impl UserDetails {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Phone => &self.phone,
            UserField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::Name => self.name = value,
            UserField::Phone => self.phone = value,
            UserField::Address => self.address = value,
        }
    }
}
