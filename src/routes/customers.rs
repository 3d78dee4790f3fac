use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::customers::CustomerForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::customers;

#[post("/customers")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    form: web::Json<CustomerForm>,
) -> impl Responder {
    match customers::create_customer(repo.get_ref(), form.into_inner()) {
        Ok(customer) => HttpResponse::Created().json(json!({
            "message": "Customer created successfully",
            "customer": customer,
        })),
        Err(err) => error_response(err),
    }
}

#[get("/customers")]
pub async fn show_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    match customers::load_customers(repo.get_ref()) {
        Ok(customer_list) => HttpResponse::Ok().json(customer_list),
        Err(err) => error_response(err),
    }
}

#[get("/customers/{customer_id}")]
pub async fn show_customer(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match customers::load_customer(repo.get_ref(), path.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err),
    }
}

#[put("/customers/{customer_id}")]
pub async fn edit_customer(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<CustomerForm>,
) -> impl Responder {
    match customers::modify_customer(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(json!({
            "message": "Customer updated successfully",
            "customer": customer,
        })),
        Err(err) => error_response(err),
    }
}

#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match customers::remove_customer(repo.get_ref(), path.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(json!({
            "message": format!("Successfully deleted customer {}", customer.name),
        })),
        Err(err) => error_response(err),
    }
}
