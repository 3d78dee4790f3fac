use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::orders::{CreateOrderForm, RemoveProductsForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::orders;

#[post("/orders")]
pub async fn add_order(
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateOrderForm>,
) -> impl Responder {
    match orders::create_order(repo.get_ref(), form.into_inner()) {
        Ok(order) => HttpResponse::Created().json(json!({
            "message": "Order created successfully",
            "order": order,
        })),
        Err(err) => error_response(err),
    }
}

#[get("/orders/customers/{customer_id}")]
pub async fn show_customer_orders(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match orders::load_customer_orders(repo.get_ref(), path.into_inner()) {
        Ok(order_list) => HttpResponse::Ok().json(order_list),
        Err(err) => error_response(err),
    }
}

#[get("/orders/{order_id}/products")]
pub async fn show_order_products(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match orders::load_order_products(repo.get_ref(), path.into_inner()) {
        Ok(product_list) => HttpResponse::Ok().json(product_list),
        Err(err) => error_response(err),
    }
}

#[put("/orders/{order_id}/add_product/{product_id}")]
pub async fn add_order_product(
    repo: web::Data<DieselRepository>,
    path: web::Path<(i32, i32)>,
) -> impl Responder {
    let (order_id, product_id) = path.into_inner();

    match orders::attach_product(repo.get_ref(), order_id, product_id) {
        Ok(product_list) => HttpResponse::Ok().json(json!({
            "message": "Order updated successfully",
            "products": product_list,
        })),
        Err(err) => error_response(err),
    }
}

#[delete("/orders/{order_id}/remove_products")]
pub async fn remove_order_products(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<RemoveProductsForm>,
) -> impl Responder {
    match orders::detach_products(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product_list) => HttpResponse::Ok().json(json!({
            "message": "Products removed successfully",
            "products": product_list,
        })),
        Err(err) => error_response(err),
    }
}

#[delete("/orders/{order_id}/remove_order")]
pub async fn delete_order(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match orders::remove_order(repo.get_ref(), path.into_inner()) {
        Ok((order, product_list)) => HttpResponse::Ok().json(json!({
            "message": "Order deleted successfully",
            "order": order,
            "products": product_list,
        })),
        Err(err) => error_response(err),
    }
}
