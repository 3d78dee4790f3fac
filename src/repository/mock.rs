use mockall::mock;

use super::{
    CustomerReader, CustomerWriter, OrderReader, OrderWriter, ProductReader, ProductWriter,
};
use crate::domain::{
    customer::{Customer, NewCustomer, UpdateCustomer},
    order::{NewOrder, Order},
    product::{NewProduct, Product, UpdateProduct},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub CustomerRepository {}

    impl CustomerReader for CustomerRepository {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }

    impl CustomerWriter for CustomerRepository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
        fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductRepository {}

    impl ProductReader for ProductRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for ProductRepository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

// Order services resolve customers and products before mutating, so the
// mock carries all four trait hats at once.
mock! {
    pub OrderRepository {}

    impl CustomerReader for OrderRepository {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }

    impl ProductReader for OrderRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }

    impl OrderReader for OrderRepository {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders_by_customer(&self, customer_id: i32) -> RepositoryResult<Vec<Order>>;
        fn list_order_products(&self, order_id: i32) -> RepositoryResult<Vec<Product>>;
    }

    impl OrderWriter for OrderRepository {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn add_order_product(&self, order_id: i32, product_id: i32) -> RepositoryResult<()>;
        fn remove_order_products(&self, order_id: i32, product_ids: &[i32]) -> RepositoryResult<usize>;
        fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
    }
}
