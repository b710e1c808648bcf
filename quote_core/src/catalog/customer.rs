//! Customers a quote can be addressed to.

use serde::{Deserialize, Serialize};

use super::SpecId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: SpecId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Customer {
    pub fn new(id: SpecId, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
            phone_number: None,
            address: None,
            note: None,
        }
    }
}
