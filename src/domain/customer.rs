use serde::{Deserialize, Serialize};

/// Domain representation of a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: i32,
    /// Human-friendly display name of the customer.
    pub name: String,
    /// Optional contact email address.
    pub email: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    /// Human-friendly display name of the customer.
    pub name: String,
    /// Optional contact email address.
    pub email: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
}

impl NewCustomer {
    /// Build a new customer payload with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            address: None,
        }
    }

    /// Attach an email address to the customer payload.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach a postal address to the customer payload.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Replacement data applied when updating an existing customer.
///
/// Updates overwrite all three mutable fields together; omitted optional
/// fields are cleared rather than preserved.
#[derive(Debug, Clone)]
pub struct UpdateCustomer {
    /// Replacement display name.
    pub name: String,
    /// Replacement email address, `None` clears the stored value.
    pub email: Option<String>,
    /// Replacement postal address, `None` clears the stored value.
    pub address: Option<String>,
}
