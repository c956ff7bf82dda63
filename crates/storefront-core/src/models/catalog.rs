//! Row types inserted by the seed module.

use jiff::civil::Date;

/// A product row before insertion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewProduct {
    pub name: &'static str,
    pub category: &'static str,
    pub price: f64,
}

/// A customer row before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
}

/// An order row before insertion.
///
/// `customer_id` and `product_id` refer to the auto-assigned keys of rows
/// already present in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: u32,
    pub order_date: Date,
}

impl NewProduct {
    pub const fn new(name: &'static str, category: &'static str, price: f64) -> Self {
        Self {
            name,
            category,
            price,
        }
    }
}

impl NewCustomer {
    pub const fn new(
        first_name: &'static str,
        last_name: &'static str,
        email: &'static str,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
        }
    }
}
