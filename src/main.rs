use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use storefront_api::db::establish_connection_pool;
use storefront_api::repository::DieselRepository;
use storefront_api::routes::customers::{
    add_customer, delete_customer, edit_customer, show_customer, show_customers,
};
use storefront_api::routes::json_error_handler;
use storefront_api::routes::orders::{
    add_order, add_order_product, delete_order, remove_order_products, show_customer_orders,
    show_order_products,
};
use storefront_api::routes::products::{
    add_product, delete_product, edit_product, show_product, show_products,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(add_customer)
            .service(show_customers)
            .service(show_customer)
            .service(edit_customer)
            .service(delete_customer)
            .service(add_product)
            .service(show_products)
            .service(show_product)
            .service(edit_product)
            .service(delete_product)
            .service(add_order)
            .service(show_customer_orders)
            .service(show_order_products)
            .service(add_order_product)
            .service(remove_order_products)
            .service(delete_order)
    })
    .bind((address, port))?
    .run()
    .await
}
