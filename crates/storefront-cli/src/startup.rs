//! Opening the database before the menu starts.

use std::io::Write;

use anyhow::Result;
use log::{error, warn};
use storefront_core::{Database, DatabaseBuilder};

use crate::renderer::TerminalRenderer;

/// Recreates the database file and its schema, reporting each step.
///
/// Returns `None` when no connection could be opened; the caller should exit
/// without entering the menu. A schema failure is reported and the opened
/// database is still returned.
pub fn open_database<W: Write>(
    builder: DatabaseBuilder,
    renderer: &TerminalRenderer,
    out: &mut W,
) -> Result<Option<Database>> {
    let db = match builder.build() {
        Ok(db) => db,
        Err(e) => {
            error!("Could not open database: {e}");
            renderer.render(out, &format!("{e}\n"))?;
            return Ok(None);
        }
    };

    let path = db.path().display().to_string();
    if db.replaced_existing() {
        renderer.render(out, &format!("Removed old database file: {path}\n"))?;
    }
    renderer.render(out, &format!("Successfully connected to database: {path}\n"))?;

    prepare_schema(db, renderer, out).map(Some)
}

/// Creates the schema on an opened database, reporting the result.
///
/// A failure is printed and the database is handed back anyway so the menu
/// can still start.
pub fn prepare_schema<W: Write>(
    mut db: Database,
    renderer: &TerminalRenderer,
    out: &mut W,
) -> Result<Database> {
    match db.ensure_schema() {
        Ok(()) => renderer.render(out, "Database setup complete. Tables are ready.\n")?,
        Err(e) => {
            warn!("Continuing without a complete schema");
            renderer.render(out, &format!("Error during setup: {e}\n"))?;
        }
    }

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;
    use storefront_core::Table;
    use tempfile::TempDir;

    fn run(builder: DatabaseBuilder) -> (Option<Database>, String) {
        let mut out = Vec::new();
        let db = open_database(builder, &TerminalRenderer::new(false), &mut out).unwrap();
        (db, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_fresh_start() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("shop.db");

        let (db, output) = run(DatabaseBuilder::new().with_database_path(Some(&db_path)));
        assert!(db.is_some());
        assert!(!output.contains("Removed old database file"));
        assert!(output.contains("Successfully connected to database:"));
        assert!(output.ends_with("Database setup complete. Tables are ready.\n"));
    }

    #[test]
    fn test_restart_removes_old_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("shop.db");
        std::fs::write(&db_path, b"").unwrap();

        let (db, output) = run(DatabaseBuilder::new().with_database_path(Some(&db_path)));
        assert!(db.is_some());
        assert!(output.starts_with("Removed old database file: "));
    }

    #[test]
    fn test_connection_failure_skips_menu() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing").join("shop.db");

        let (db, output) = run(DatabaseBuilder::new().with_database_path(Some(&db_path)));
        assert!(db.is_none());
        assert!(output.contains("Failed to open database connection"));
        assert!(!output.contains("Successfully connected"));
    }

    #[test]
    fn test_schema_failure_is_reported_and_menu_still_starts() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open(temp_dir.path().join("shop.db")).unwrap();
        // An index already holding the name `orders` makes the last CREATE TABLE fail.
        db.connection()
            .execute_batch("CREATE TABLE scratch (x); CREATE INDEX orders ON scratch (x);")
            .unwrap();

        let mut out = Vec::new();
        let db = prepare_schema(db, &TerminalRenderer::new(false), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with("Error during setup: Failed to create schema: "));
        assert!(output.contains("there is already an index named orders"));
        assert!(!output.contains("Database setup complete"));
        // The rollback removed the tables created before the failure.
        assert!(db.row_count(Table::Products).is_err());

        let mut menu_out = Vec::new();
        Menu::new(db, TerminalRenderer::new(false), "4\n0\n".as_bytes(), &mut menu_out)
            .run()
            .unwrap();
        let menu_output = String::from_utf8(menu_out).unwrap();
        assert!(menu_output.contains("--- SQL Database Manager ---"));
        assert!(menu_output.contains("An error occurred: "));
        assert!(menu_output.ends_with("Database connection closed.\n"));
    }

    #[test]
    fn test_directory_path_is_rejected_before_menu() {
        let temp_dir = TempDir::new().unwrap();

        let (db, output) = run(DatabaseBuilder::new().with_database_path(Some(temp_dir.path())));
        assert!(db.is_none());
        assert!(output.starts_with("Configuration error: database path '"));
    }
}
