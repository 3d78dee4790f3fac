use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};

/// JSON body accepted when creating or replacing a customer.
///
/// The same shape serves both operations: updates are full replacements of
/// the three mutable fields.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub email: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
}

impl CustomerForm {
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
            address: self.address,
        }
    }

    pub fn into_update_customer(self) -> UpdateCustomer {
        UpdateCustomer {
            name: self.name,
            email: self.email,
            address: self.address,
        }
    }
}
