use validator::Validate;

use crate::domain::product::Product;
use crate::forms::products::ProductForm;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the payload and persists a new product.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    form.validate()?;

    repo.create_product(&form.into_new_product())
        .map_err(ServiceError::from)
}

/// Returns every stored product.
pub fn load_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Resolves a single product by id.
pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)?
        .ok_or_else(|| ServiceError::NotFound("Invalid product id".to_string()))
}

/// Replaces both mutable fields of an existing product.
pub fn modify_product<R>(repo: &R, product_id: i32, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    if repo.get_product_by_id(product_id)?.is_none() {
        return Err(ServiceError::NotFound("Invalid product id".to_string()));
    }

    form.validate()?;

    repo.update_product(product_id, &form.into_update_product())
        .map_err(ServiceError::from)
}

/// Deletes a product; rejected while any order still contains it.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let product = load_product(repo, product_id)?;

    repo.delete_product(product_id)?;

    Ok(product)
}
