use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(belongs_to(super::customer::Customer, foreign_key = customer_id))]
pub struct Order {
    pub id: i32,
    pub order_date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub order_date: NaiveDate,
    pub customer_id: i32,
}

/// Row in the `order_products` association table. Pure membership with a
/// composite primary key, so the same struct serves reads and inserts.
#[derive(Debug, Clone, Identifiable, Queryable, Insertable, Associations)]
#[diesel(table_name = crate::schema::order_products)]
#[diesel(primary_key(order_id, product_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
pub struct OrderProduct {
    pub order_id: i32,
    pub product_id: i32,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            order_date: value.order_date,
            customer_id: value.customer_id,
        }
    }
}

impl From<&DomainNewOrder> for NewOrder {
    fn from(value: &DomainNewOrder) -> Self {
        Self {
            order_date: value.order_date,
            customer_id: value.customer_id,
        }
    }
}
