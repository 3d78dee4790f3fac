use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products;

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(json!({
            "message": "Product created successfully",
            "product": product,
        })),
        Err(err) => error_response(err),
    }
}

#[get("/products")]
pub async fn show_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match products::load_products(repo.get_ref()) {
        Ok(product_list) => HttpResponse::Ok().json(product_list),
        Err(err) => error_response(err),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match products::load_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[put("/products/{product_id}")]
pub async fn edit_product(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    match products::modify_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(json!({
            "message": "Product updated successfully",
            "product": product,
        })),
        Err(err) => error_response(err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match products::remove_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(json!({
            "message": "Product deleted successfully",
            "product": product,
        })),
        Err(err) => error_response(err),
    }
}
