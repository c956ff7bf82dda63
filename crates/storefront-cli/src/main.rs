//! Storefront CLI Application
//!
//! Recreates the shop database and runs the interactive menu over stdin and
//! stdout.

mod args;
mod menu;
mod renderer;
mod startup;

use std::io;

use anyhow::Result;
use args::Args;
use clap::Parser;
use log::info;
use menu::Menu;
use renderer::TerminalRenderer;
use storefront_core::DatabaseBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let builder = DatabaseBuilder::new().with_database_path(database_file);

    info!("Storefront started");

    let mut stdout = io::stdout();
    let Some(database) = startup::open_database(builder, &renderer, &mut stdout)? else {
        return Ok(());
    };

    Menu::new(database, renderer, io::stdin().lock(), stdout).run()
}
