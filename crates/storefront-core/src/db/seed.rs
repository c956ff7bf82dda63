//! Fixed sample rows for the demo shop.
//!
//! Each `add_*` function inserts its whole list through one prepared
//! statement and returns how many rows were written. A constraint violation
//! stops the batch and is returned as an error; rows inserted before it stay
//! in the caller's transaction until it is rolled back.

use jiff::{civil::Date, Zoned};
use log::debug;
use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ChangeKind, ChangeSummary, NewCustomer, NewOrder, NewProduct},
};

const INSERT_PRODUCT_SQL: &str = "INSERT INTO products (name, category, price) VALUES (?1, ?2, ?3)";
const INSERT_CUSTOMER_SQL: &str =
    "INSERT INTO customers (first_name, last_name, email) VALUES (?1, ?2, ?3)";
const INSERT_ORDER_SQL: &str =
    "INSERT INTO orders (customer_id, product_id, quantity, order_date) VALUES (?1, ?2, ?3, ?4)";

pub const PRODUCTS: [NewProduct; 6] = [
    NewProduct::new("iPhone 15 Pro", "smartphones", 1199.99),
    NewProduct::new("Samsung Galaxy S25", "smartphones", 1099.99),
    NewProduct::new("MacBook Air M4", "laptops", 1299.00),
    NewProduct::new("Dell XPS 15", "laptops", 1899.50),
    NewProduct::new("iPad Pro", "tablets", 999.00),
    NewProduct::new("Samsung Galaxy Tab S10", "tablets", 750.00),
];

pub const CUSTOMERS: [NewCustomer; 3] = [
    NewCustomer::new("John", "Doe", "john.doe@example.com"),
    NewCustomer::new("Jane", "Smith", "jane.smith@example.com"),
    NewCustomer::new("Peter", "Jones", "peter.jones@example.com"),
];

/// (customer id, product id, quantity) for each sample order.
pub const ORDER_LINES: [(i64, i64, u32); 5] = [(1, 1, 1), (1, 3, 1), (2, 2, 2), (3, 5, 1), (2, 1, 1)];

/// Sample orders, all placed on `order_date`.
pub fn orders_on(order_date: Date) -> Vec<NewOrder> {
    ORDER_LINES
        .iter()
        .map(|&(customer_id, product_id, quantity)| NewOrder {
            customer_id,
            product_id,
            quantity,
            order_date,
        })
        .collect()
}

/// Inserts the sample products.
pub fn add_products(conn: &Connection) -> Result<ChangeSummary> {
    let mut stmt = conn
        .prepare(INSERT_PRODUCT_SQL)
        .db_context("Failed to prepare product insert")?;

    let mut rows = 0;
    for product in &PRODUCTS {
        rows += stmt
            .execute(params![product.name, product.category, product.price])
            .db_context("Failed to insert product")?;
    }

    debug!("Inserted {rows} products");
    Ok(ChangeSummary::new(ChangeKind::ProductsAdded, rows))
}

/// Inserts the sample customers.
pub fn add_customers(conn: &Connection) -> Result<ChangeSummary> {
    let mut stmt = conn
        .prepare(INSERT_CUSTOMER_SQL)
        .db_context("Failed to prepare customer insert")?;

    let mut rows = 0;
    for customer in &CUSTOMERS {
        rows += stmt
            .execute(params![customer.first_name, customer.last_name, customer.email])
            .db_context("Failed to insert customer")?;
    }

    debug!("Inserted {rows} customers");
    Ok(ChangeSummary::new(ChangeKind::CustomersAdded, rows))
}

/// Inserts the sample orders dated today.
pub fn add_orders(conn: &Connection) -> Result<ChangeSummary> {
    insert_orders(conn, &orders_on(Zoned::now().date()))
}

/// Inserts the given orders.
pub fn insert_orders(conn: &Connection, orders: &[NewOrder]) -> Result<ChangeSummary> {
    let mut stmt = conn
        .prepare(INSERT_ORDER_SQL)
        .db_context("Failed to prepare order insert")?;

    let mut rows = 0;
    for order in orders {
        rows += stmt
            .execute(params![
                order.customer_id,
                order.product_id,
                order.quantity,
                order.order_date.to_string()
            ])
            .db_context("Failed to insert order")?;
    }

    debug!("Inserted {rows} orders");
    Ok(ChangeSummary::new(ChangeKind::OrdersAdded, rows))
}
