use validator::Validate;

use crate::domain::customer::Customer;
use crate::forms::customers::CustomerForm;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the payload and persists a new customer.
pub fn create_customer<R>(repo: &R, form: CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    form.validate()?;

    repo.create_customer(&form.into_new_customer())
        .map_err(ServiceError::from)
}

/// Returns every stored customer.
pub fn load_customers<R>(repo: &R) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_customers().map_err(ServiceError::from)
}

/// Resolves a single customer by id.
pub fn load_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)?
        .ok_or_else(|| ServiceError::NotFound("Invalid customer id".to_string()))
}

/// Replaces the three mutable fields of an existing customer.
///
/// The id is resolved before the payload is validated, so an unknown id
/// wins over a malformed body.
pub fn modify_customer<R>(repo: &R, customer_id: i32, form: CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    if repo.get_customer_by_id(customer_id)?.is_none() {
        return Err(ServiceError::NotFound("Invalid customer id".to_string()));
    }

    form.validate()?;

    repo.update_customer(customer_id, &form.into_update_customer())
        .map_err(ServiceError::from)
}

/// Deletes a customer; rejected while any order still references it.
pub fn remove_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let customer = load_customer(repo, customer_id)?;

    repo.delete_customer(customer_id)?;

    Ok(customer)
}
