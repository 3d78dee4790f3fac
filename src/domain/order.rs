use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain representation of an order placed by a customer.
///
/// Product membership is held in the `order_products` association table and
/// queried separately; the order row itself stays flat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Calendar date the order was placed.
    pub order_date: NaiveDate,
    /// Identifier of the customer that owns the order.
    pub customer_id: i32,
}

/// Payload required to insert a new order together with its initial
/// product set.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Calendar date the order was placed.
    pub order_date: NaiveDate,
    /// Identifier of the customer that owns the order.
    pub customer_id: i32,
    /// Products attached to the order at creation time. Membership is
    /// set-like, so the list holds no duplicates.
    pub product_ids: Vec<i32>,
}

impl NewOrder {
    /// Build a new order payload without any products attached.
    #[must_use]
    pub fn new(order_date: NaiveDate, customer_id: i32) -> Self {
        Self {
            order_date,
            customer_id,
            product_ids: Vec::new(),
        }
    }

    /// Attach the initial product set, collapsing duplicate identifiers.
    #[must_use]
    pub fn with_products(mut self, product_ids: Vec<i32>) -> Self {
        let mut deduped = Vec::with_capacity(product_ids.len());
        for id in product_ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        self.product_ids = deduped;
        self
    }
}
