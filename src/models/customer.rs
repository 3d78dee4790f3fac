use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

// Updates are full replacements, so a `None` must write NULL instead of
// keeping the previous value.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers, treat_none_as_null = true)]
pub struct UpdateCustomer<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            address: value.address,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_deref(),
            address: value.address.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(value: &'a DomainUpdateCustomer) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_deref(),
            address: value.address.as_deref(),
        }
    }
}
