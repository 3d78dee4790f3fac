use validator::Validate;

use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::forms::orders::{CreateOrderForm, RemoveProductsForm};
use crate::repository::{CustomerReader, OrderReader, OrderWriter, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Creates an order with its initial product set.
///
/// The customer is resolved first, then every listed product; the first
/// unresolved id fails the whole request and nothing is persisted. The
/// repository writes the order and its association rows in one
/// transaction.
pub fn create_order<R>(repo: &R, form: CreateOrderForm) -> ServiceResult<Order>
where
    R: CustomerReader + ProductReader + OrderWriter + ?Sized,
{
    form.validate()?;

    if repo.get_customer_by_id(form.customer_id)?.is_none() {
        return Err(ServiceError::NotFound("Invalid customer id".to_string()));
    }

    for product_id in &form.products {
        if repo.get_product_by_id(*product_id)?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "Invalid product id {product_id}"
            )));
        }
    }

    repo.create_order(&form.into_new_order())
        .map_err(ServiceError::from)
}

/// Returns the orders owned by a customer.
pub fn load_customer_orders<R>(repo: &R, customer_id: i32) -> ServiceResult<Vec<Order>>
where
    R: CustomerReader + OrderReader + ?Sized,
{
    if repo.get_customer_by_id(customer_id)?.is_none() {
        return Err(ServiceError::NotFound("Invalid customer id".to_string()));
    }

    repo.list_orders_by_customer(customer_id)
        .map_err(ServiceError::from)
}

/// Returns the products currently attached to an order.
pub fn load_order_products<R>(repo: &R, order_id: i32) -> ServiceResult<Vec<Product>>
where
    R: OrderReader + ?Sized,
{
    resolve_order(repo, order_id)?;

    repo.list_order_products(order_id)
        .map_err(ServiceError::from)
}

/// Attaches a product to an order and returns the updated membership.
///
/// Order and product are resolved independently so each absence reports
/// its own message; attaching an already-attached product is rejected.
pub fn attach_product<R>(repo: &R, order_id: i32, product_id: i32) -> ServiceResult<Vec<Product>>
where
    R: OrderReader + ProductReader + OrderWriter + ?Sized,
{
    resolve_order(repo, order_id)?;

    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound("Invalid product id".to_string()));
    }

    repo.add_order_product(order_id, product_id)?;

    repo.list_order_products(order_id)
        .map_err(ServiceError::from)
}

/// Detaches the listed products from an order and returns the remaining
/// membership. Ids that are unknown or not attached are skipped silently.
pub fn detach_products<R>(
    repo: &R,
    order_id: i32,
    form: RemoveProductsForm,
) -> ServiceResult<Vec<Product>>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    resolve_order(repo, order_id)?;

    repo.remove_order_products(order_id, &form.products)?;

    repo.list_order_products(order_id)
        .map_err(ServiceError::from)
}

/// Deletes an order, cascading its association rows, and returns the
/// deleted order together with its former product list.
pub fn remove_order<R>(repo: &R, order_id: i32) -> ServiceResult<(Order, Vec<Product>)>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    let order = resolve_order(repo, order_id)?;
    let products = repo.list_order_products(order_id)?;

    repo.delete_order(order_id)?;

    Ok((order, products))
}

fn resolve_order<R>(repo: &R, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_by_id(order_id)?
        .ok_or_else(|| ServiceError::NotFound("Invalid order id".to_string()))
}
