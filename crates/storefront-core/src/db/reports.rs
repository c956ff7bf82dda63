//! Aggregate reports and the smartphone price update.

use log::debug;
use rusqlite::{params, types::Value, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ChangeKind, ChangeSummary, QueryTable},
};

const TOTAL_SALES_SQL: &str = "
    SELECT SUM(p.price * o.quantity) AS total_sales
    FROM orders o
    JOIN products p ON o.product_id = p.id";

const ORDERS_PER_CUSTOMER_SQL: &str = "
    SELECT c.first_name, c.last_name, COUNT(o.id) AS order_count
    FROM customers c
    INNER JOIN orders o ON c.id = o.customer_id
    GROUP BY c.id";

const AVERAGE_ORDER_VALUE_SQL: &str = "
    SELECT AVG(order_total) AS average_order_value
    FROM (
        SELECT SUM(p.price * o.quantity) AS order_total
        FROM orders o
        JOIN products p ON o.product_id = p.id
        GROUP BY o.id
    )";

// Ties on the count come back in whatever order SQLite groups them.
const MOST_POPULAR_CATEGORY_SQL: &str = "
    SELECT p.category, COUNT(o.id) AS orders_in_category
    FROM products p
    JOIN orders o ON p.id = o.product_id
    GROUP BY p.category
    ORDER BY orders_in_category DESC
    LIMIT 1";

const PRODUCTS_PER_CATEGORY_SQL: &str = "
    SELECT category, COUNT(id) AS product_count
    FROM products
    GROUP BY category";

const UPDATE_CATEGORY_PRICES_SQL: &str = "UPDATE products SET price = price * ?1 WHERE category = ?2";

pub const SMARTPHONE_CATEGORY: &str = "smartphones";
pub const SMARTPHONE_PRICE_FACTOR: f64 = 1.10;

/// Sum of price × quantity over every order.
pub fn total_sales(conn: &Connection) -> Result<QueryTable> {
    run_query(conn, TOTAL_SALES_SQL)
}

/// Number of orders per customer who has ordered at least once.
pub fn orders_per_customer(conn: &Connection) -> Result<QueryTable> {
    run_query(conn, ORDERS_PER_CUSTOMER_SQL)
}

/// Mean of the per-order totals.
pub fn average_order_value(conn: &Connection) -> Result<QueryTable> {
    run_query(conn, AVERAGE_ORDER_VALUE_SQL)
}

/// The category with the most orders, as a single row.
pub fn most_popular_category(conn: &Connection) -> Result<QueryTable> {
    run_query(conn, MOST_POPULAR_CATEGORY_SQL)
}

/// Number of products in each category.
pub fn products_per_category(conn: &Connection) -> Result<QueryTable> {
    run_query(conn, PRODUCTS_PER_CATEGORY_SQL)
}

/// Raises every smartphone price by 10%.
///
/// Repeated calls compound.
pub fn update_smartphone_prices(conn: &Connection) -> Result<ChangeSummary> {
    let rows = conn
        .execute(
            UPDATE_CATEGORY_PRICES_SQL,
            params![SMARTPHONE_PRICE_FACTOR, SMARTPHONE_CATEGORY],
        )
        .db_context("Failed to update smartphone prices")?;

    debug!("Updated {rows} smartphone prices");
    Ok(ChangeSummary::new(ChangeKind::SmartphonePricesRaised, rows))
}

/// Runs a parameterless query and collects every row.
pub fn run_query(conn: &Connection, sql: &str) -> Result<QueryTable> {
    let mut stmt = conn.prepare(sql).db_context("Failed to prepare query")?;

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = columns.len();
    let mut table = QueryTable::new(columns);

    let mut rows = stmt.query([]).db_context("Failed to run query")?;
    while let Some(row) = rows.next().db_context("Failed to read query row")? {
        let values = (0..column_count)
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read query column")?;
        table.rows.push(values);
    }

    debug!("Query returned {} rows", table.len());
    Ok(table)
}
