use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

use crate::models::order::{
    NewOrder as DbNewOrder, Order as DbOrder, OrderProduct as DbOrderProduct,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrderReader, OrderWriter};
use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};
use crate::domain::product::Product as DomainProduct;

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_orders_by_customer(&self, customer_id: i32) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_orders = orders::table
            .filter(orders::customer_id.eq(customer_id))
            .order(orders::id.asc())
            .load::<DbOrder>(&mut conn)?;

        Ok(db_orders.into_iter().map(Into::into).collect())
    }

    fn list_order_products(&self, order_id: i32) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::{order_products, products};

        let mut conn = self.conn()?;
        let db_products = order_products::table
            .inner_join(products::table)
            .filter(order_products::order_id.eq(order_id))
            .order(products::id.asc())
            .select(DbProduct::as_select())
            .load::<DbProduct>(&mut conn)?;

        Ok(db_products.into_iter().map(Into::into).collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_products, orders};

        let mut conn = self.conn()?;

        // The order row and its association rows land together or not at
        // all; no half-populated order may survive a failed insert.
        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(orders::table)
                .values(&DbNewOrder::from(new_order))
                .get_result::<DbOrder>(conn)?;

            if !new_order.product_ids.is_empty() {
                let rows: Vec<DbOrderProduct> = new_order
                    .product_ids
                    .iter()
                    .map(|product_id| DbOrderProduct {
                        order_id: created.id,
                        product_id: *product_id,
                    })
                    .collect();

                diesel::insert_into(order_products::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            Ok(created.into())
        })
    }

    fn add_order_product(&self, order_id: i32, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::order_products;

        let mut conn = self.conn()?;

        let result = diesel::insert_into(order_products::table)
            .values(&DbOrderProduct {
                order_id,
                product_id,
            })
            .execute(&mut conn);

        match result {
            Ok(_) => Ok(()),
            Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(RepositoryError::Conflict(
                    "Duplicate product in order".to_string(),
                ))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn remove_order_products(
        &self,
        order_id: i32,
        product_ids: &[i32],
    ) -> RepositoryResult<usize> {
        use crate::schema::order_products;

        if product_ids.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        // Ids that are unknown or not attached match nothing and are
        // silently skipped; the whole list commits as one statement.
        let deleted = diesel::delete(
            order_products::table
                .filter(order_products::order_id.eq(order_id))
                .filter(order_products::product_id.eq_any(product_ids)),
        )
        .execute(&mut conn)?;

        Ok(deleted)
    }

    fn delete_order(&self, order_id: i32) -> RepositoryResult<()> {
        use crate::schema::{order_products, orders};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(order_products::table.filter(order_products::order_id.eq(order_id)))
                .execute(conn)?;

            let deleted = diesel::delete(orders::table.filter(orders::id.eq(order_id)))
                .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
