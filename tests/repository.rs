use chrono::NaiveDate;

use storefront_api::domain::customer::{NewCustomer, UpdateCustomer};
use storefront_api::domain::order::NewOrder;
use storefront_api::domain::product::{NewProduct, UpdateProduct};
use storefront_api::repository::errors::RepositoryError;
use storefront_api::repository::{
    CustomerReader, CustomerWriter, DieselRepository, OrderReader, OrderWriter, ProductReader,
    ProductWriter,
};

mod common;

fn order_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_customer(
            &NewCustomer::new("Alice")
                .with_email("alice@example.com")
                .with_address("1 Main St"),
        )
        .unwrap();
    assert_eq!(created.name, "Alice");
    assert_eq!(created.email.as_deref(), Some("alice@example.com"));

    let fetched = repo.get_customer_by_id(created.id).unwrap();
    assert_eq!(fetched, Some(created.clone()));

    // Full replace: omitted optional fields are cleared, not preserved.
    let updated = repo
        .update_customer(
            created.id,
            &UpdateCustomer {
                name: "Alice B".to_string(),
                email: None,
                address: None,
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Alice B");
    assert!(updated.email.is_none());
    assert!(updated.address.is_none());

    let err = repo
        .update_customer(
            9999,
            &UpdateCustomer {
                name: "Nobody".to_string(),
                email: None,
                address: None,
            },
        )
        .expect_err("expected update of missing row to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    repo.delete_customer(created.id).unwrap();
    assert!(repo.get_customer_by_id(created.id).unwrap().is_none());
    assert!(repo.list_customers().unwrap().is_empty());
}

#[test]
fn test_product_repository_crud() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo.create_product(&NewProduct::new("Keyboard", 49.99)).unwrap();
    let other = repo.create_product(&NewProduct::new("Mouse", 19.99)).unwrap();

    let listed = repo.list_products().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[1].id, other.id);

    let updated = repo
        .update_product(
            created.id,
            &UpdateProduct {
                product_name: "Mechanical Keyboard".to_string(),
                price: 89.99,
            },
        )
        .unwrap();
    assert_eq!(updated.product_name, "Mechanical Keyboard");

    repo.delete_product(created.id).unwrap();
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());

    let err = repo
        .delete_product(created.id)
        .expect_err("expected delete of missing row to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_order_create_attaches_initial_products() {
    let test_db = common::TestDb::new("test_order_create_attaches_initial_products.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = repo.create_customer(&NewCustomer::new("Alice")).unwrap();
    let p1 = repo.create_product(&NewProduct::new("Keyboard", 49.99)).unwrap();
    let p2 = repo.create_product(&NewProduct::new("Mouse", 19.99)).unwrap();

    let order = repo
        .create_order(&NewOrder::new(order_date(), customer.id).with_products(vec![p1.id, p2.id]))
        .unwrap();
    assert_eq!(order.customer_id, customer.id);
    assert_eq!(order.order_date, order_date());

    let products = repo.list_order_products(order.id).unwrap();
    assert_eq!(products.len(), 2);

    let orders = repo.list_orders_by_customer(customer.id).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
}

#[test]
fn test_add_order_product_rejects_duplicates() {
    let test_db = common::TestDb::new("test_add_order_product_rejects_duplicates.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = repo.create_customer(&NewCustomer::new("Alice")).unwrap();
    let product = repo.create_product(&NewProduct::new("Keyboard", 49.99)).unwrap();
    let order = repo
        .create_order(&NewOrder::new(order_date(), customer.id))
        .unwrap();

    repo.add_order_product(order.id, product.id).unwrap();

    let err = repo
        .add_order_product(order.id, product.id)
        .expect_err("expected duplicate attach to fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    assert_eq!(repo.list_order_products(order.id).unwrap().len(), 1);
}

#[test]
fn test_remove_order_products_skips_unknown_ids() {
    let test_db = common::TestDb::new("test_remove_order_products_skips_unknown_ids.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = repo.create_customer(&NewCustomer::new("Alice")).unwrap();
    let p1 = repo.create_product(&NewProduct::new("Keyboard", 49.99)).unwrap();
    let p2 = repo.create_product(&NewProduct::new("Mouse", 19.99)).unwrap();
    let order = repo
        .create_order(&NewOrder::new(order_date(), customer.id).with_products(vec![p1.id, p2.id]))
        .unwrap();

    let removed = repo
        .remove_order_products(order.id, &[p1.id, 9999])
        .unwrap();
    assert_eq!(removed, 1);

    let remaining = repo.list_order_products(order.id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, p2.id);
}

#[test]
fn test_delete_order_cascades_associations_only() {
    let test_db = common::TestDb::new("test_delete_order_cascades_associations_only.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = repo.create_customer(&NewCustomer::new("Alice")).unwrap();
    let product = repo.create_product(&NewProduct::new("Keyboard", 49.99)).unwrap();
    let order = repo
        .create_order(&NewOrder::new(order_date(), customer.id).with_products(vec![product.id]))
        .unwrap();

    repo.delete_order(order.id).unwrap();

    assert!(repo.get_order_by_id(order.id).unwrap().is_none());
    // The referenced product and owning customer survive the cascade.
    assert!(repo.get_product_by_id(product.id).unwrap().is_some());
    assert!(repo.get_customer_by_id(customer.id).unwrap().is_some());

    let err = repo
        .delete_order(order.id)
        .expect_err("expected delete of missing order to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_delete_customer_restricted_while_orders_exist() {
    let test_db = common::TestDb::new("test_delete_customer_restricted_while_orders_exist.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = repo.create_customer(&NewCustomer::new("Alice")).unwrap();
    let order = repo
        .create_order(&NewOrder::new(order_date(), customer.id))
        .unwrap();

    let err = repo
        .delete_customer(customer.id)
        .expect_err("expected restricted delete to fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));
    assert!(repo.get_customer_by_id(customer.id).unwrap().is_some());

    repo.delete_order(order.id).unwrap();
    repo.delete_customer(customer.id).unwrap();
}

#[test]
fn test_delete_product_restricted_while_attached() {
    let test_db = common::TestDb::new("test_delete_product_restricted_while_attached.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = repo.create_customer(&NewCustomer::new("Alice")).unwrap();
    let product = repo.create_product(&NewProduct::new("Keyboard", 49.99)).unwrap();
    let order = repo
        .create_order(&NewOrder::new(order_date(), customer.id).with_products(vec![product.id]))
        .unwrap();

    let err = repo
        .delete_product(product.id)
        .expect_err("expected restricted delete to fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    repo.remove_order_products(order.id, &[product.id]).unwrap();
    repo.delete_product(product.id).unwrap();
}
