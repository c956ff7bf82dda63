//! The menu actions and how a line of input maps onto them.

use std::fmt;

use rusqlite::Connection;

use crate::{
    db::{reports, seed},
    error::Result,
    models::Outcome,
};

/// Menu key that ends the session.
pub const EXIT_KEY: &str = "0";

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddProducts,
    AddCustomers,
    AddOrders,
    TotalSales,
    OrdersPerCustomer,
    AverageOrderValue,
    MostPopularCategory,
    ProductsPerCategory,
    UpdateSmartphonePrices,
}

impl Action {
    /// Every action in menu order.
    pub const ALL: [Action; 9] = [
        Action::AddProducts,
        Action::AddCustomers,
        Action::AddOrders,
        Action::TotalSales,
        Action::OrdersPerCustomer,
        Action::AverageOrderValue,
        Action::MostPopularCategory,
        Action::ProductsPerCategory,
        Action::UpdateSmartphonePrices,
    ];

    /// The key typed at the menu prompt.
    pub fn key(&self) -> &'static str {
        match self {
            Action::AddProducts => "1",
            Action::AddCustomers => "2",
            Action::AddOrders => "3",
            Action::TotalSales => "4",
            Action::OrdersPerCustomer => "5",
            Action::AverageOrderValue => "6",
            Action::MostPopularCategory => "7",
            Action::ProductsPerCategory => "8",
            Action::UpdateSmartphonePrices => "9",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::AddProducts => "Add products",
            Action::AddCustomers => "Add customers",
            Action::AddOrders => "Add orders",
            Action::TotalSales => "Show total sales",
            Action::OrdersPerCustomer => "Show orders per customer",
            Action::AverageOrderValue => "Show average order value",
            Action::MostPopularCategory => "Show most popular category",
            Action::ProductsPerCategory => "Show products per category",
            Action::UpdateSmartphonePrices => "Update smartphone prices by 10%",
        }
    }

    /// Whether the action writes rows and must be confirmed before commit.
    pub fn requires_confirmation(&self) -> bool {
        matches!(
            self,
            Action::AddProducts
                | Action::AddCustomers
                | Action::AddOrders
                | Action::UpdateSmartphonePrices
        )
    }

    /// Looks up the action bound to a menu key.
    pub fn from_key(key: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }

    /// Runs the action's single statement against `conn`.
    ///
    /// Mutating actions should be given a transaction so the caller can
    /// commit or roll back afterwards.
    pub fn execute(&self, conn: &Connection) -> Result<Outcome> {
        let outcome: Outcome = match self {
            Action::AddProducts => seed::add_products(conn)?.into(),
            Action::AddCustomers => seed::add_customers(conn)?.into(),
            Action::AddOrders => seed::add_orders(conn)?.into(),
            Action::TotalSales => reports::total_sales(conn)?.into(),
            Action::OrdersPerCustomer => reports::orders_per_customer(conn)?.into(),
            Action::AverageOrderValue => reports::average_order_value(conn)?.into(),
            Action::MostPopularCategory => reports::most_popular_category(conn)?.into(),
            Action::ProductsPerCategory => reports::products_per_category(conn)?.into(),
            Action::UpdateSmartphonePrices => reports::update_smartphone_prices(conn)?.into(),
        };
        Ok(outcome)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

/// What a line typed at the menu prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Action),
    Exit,
    Invalid(String),
}

impl MenuChoice {
    /// Parses one input line, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Self {
        let key = input.trim();
        if key == EXIT_KEY {
            return MenuChoice::Exit;
        }
        match Action::from_key(key) {
            Some(action) => MenuChoice::Run(action),
            None => MenuChoice::Invalid(key.to_string()),
        }
    }
}

/// Whether an answer to the save prompt means "commit".
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
