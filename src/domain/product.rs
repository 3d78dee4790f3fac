use serde::{Deserialize, Serialize};

/// Domain representation of a product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price of the product.
    pub price: f64,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price of the product.
    pub price: f64,
}

impl NewProduct {
    /// Build a new product payload.
    #[must_use]
    pub fn new(product_name: impl Into<String>, price: f64) -> Self {
        Self {
            product_name: product_name.into(),
            price,
        }
    }
}

/// Replacement data applied when updating an existing product.
///
/// Both fields are overwritten together; partial updates are not a
/// supported mode.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Replacement product name.
    pub product_name: String,
    /// Replacement unit price.
    pub price: f64,
}
