use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};
use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::id.eq(id))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(&self) -> RepositoryResult<Vec<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_customers = customers::table
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?;

        Ok(db_customers.into_iter().map(Into::into).collect())
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &DomainNewCustomer) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(customers::table)
            .values(&DbNewCustomer::from(new_customer))
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &DomainUpdateCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let updated = diesel::update(customers::table.filter(customers::id.eq(customer_id)))
            .set(&DbUpdateCustomer::from(updates))
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::{customers, orders};

        let mut conn = self.conn()?;

        let has_orders: bool = select(exists(
            orders::table.filter(orders::customer_id.eq(customer_id)),
        ))
        .get_result(&mut conn)?;

        if has_orders {
            return Err(RepositoryError::Conflict(
                "Customer has existing orders".to_string(),
            ));
        }

        let deleted = diesel::delete(customers::table.filter(customers::id.eq(customer_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
