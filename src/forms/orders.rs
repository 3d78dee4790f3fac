use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::order::NewOrder;

/// JSON body accepted when creating an order.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderForm {
    pub order_date: NaiveDate,
    pub customer_id: i32,
    /// Initial product membership; may be empty.
    pub products: Vec<i32>,
}

impl CreateOrderForm {
    pub fn into_new_order(self) -> NewOrder {
        NewOrder::new(self.order_date, self.customer_id).with_products(self.products)
    }
}

/// JSON body accepted when detaching products from an order.
#[derive(Debug, Deserialize, Validate)]
pub struct RemoveProductsForm {
    pub products: Vec<i32>,
}
