use std::path::PathBuf;

use clap::Parser;

/// Interactive demo over a small SQLite shop database
///
/// Every run deletes the database file, recreates the products, customers
/// and orders tables, and then shows a menu for seeding sample rows, running
/// sales reports and raising smartphone prices.
#[derive(Parser, Debug)]
#[command(version, about, name = "storefront")]
pub struct Args {
    /// Path to the SQLite database file. Recreated on every run. Defaults to
    /// shop.db in the current directory
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
