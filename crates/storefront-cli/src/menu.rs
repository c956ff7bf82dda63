//! The interactive menu loop.
//!
//! Each turn prints the menu, reads one line and runs the chosen action.
//! Mutating actions run inside a transaction that stays open until the
//! operator answers the save prompt; reports run on the connection directly.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use storefront_core::{
    actions::EXIT_KEY, is_affirmative, Action, Database, MenuChoice, StoreError,
    TransactionStatus,
};

use crate::renderer::TerminalRenderer;

const MENU_TITLE: &str = "--- SQL Database Manager ---";
const CHOICE_PROMPT: &str = "Enter your choice: ";
const SAVE_PROMPT: &str = "Save changes to the database? (y/n): ";

/// Input, output and styling for one session.
struct Console<R, W> {
    renderer: TerminalRenderer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        self.renderer
            .render(&mut self.output, text)
            .context("Failed to write to terminal")
    }

    /// Prints `text` and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.say(text)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            self.say("\n")?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report_failure(&mut self, error: &StoreError) -> Result<()> {
        warn!("Action failed: {error}");
        self.say(&format!("An error occurred: {error}\n"))
    }
}

/// Menu loop owning the database connection until exit.
pub struct Menu<R, W> {
    database: Database,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(database: Database, renderer: TerminalRenderer, input: R, output: W) -> Self {
        Self {
            database,
            console: Console {
                renderer,
                input,
                output,
            },
        }
    }

    /// Runs until the operator chooses exit or input ends, then closes the
    /// connection.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.console.prompt(CHOICE_PROMPT)? else {
                debug!("Input closed, leaving menu");
                break;
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Exit => break,
                MenuChoice::Run(action) => self.dispatch(action)?,
                MenuChoice::Invalid(input) => {
                    debug!("Ignoring menu input {input:?}");
                    self.console.say("Invalid choice, please try again.\n")?;
                }
            }
        }

        let Self {
            database,
            mut console,
        } = self;
        match database.close() {
            Ok(()) => console.say("Database connection closed.\n"),
            Err(e) => console.say(&format!("An error occurred: {e}\n")),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        let mut menu = format!("\n{MENU_TITLE}\n");
        for action in Action::ALL {
            menu.push_str(&format!("{action}\n"));
        }
        menu.push_str(&format!("{EXIT_KEY}. Exit\n"));
        self.console.say(&menu)
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        info!("Executing {}", action.label());
        self.console
            .say(&format!("\nExecuting: {}...\n", action.label()))?;

        if action.requires_confirmation() {
            self.run_with_confirmation(action)
        } else {
            self.run_report(action)
        }
    }

    fn run_report(&mut self, action: Action) -> Result<()> {
        match action.execute(self.database.connection()) {
            Ok(outcome) => self.console.say(&outcome.to_string()),
            Err(e) => self.console.report_failure(&e),
        }
    }

    fn run_with_confirmation(&mut self, action: Action) -> Result<()> {
        let tx = match self.database.transaction() {
            Ok(tx) => tx,
            Err(e) => return self.console.report_failure(&e),
        };

        let outcome = match action.execute(&tx) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.console.report_failure(&e)?;
                if let Err(rollback_err) = tx.rollback() {
                    warn!("Rollback after failed action also failed: {rollback_err}");
                }
                return Ok(());
            }
        };
        self.console.say(&outcome.to_string())?;

        let answer = self.console.prompt(SAVE_PROMPT)?;
        let (status, result) = if answer.as_deref().is_some_and(is_affirmative) {
            (TransactionStatus::Committed, tx.commit())
        } else {
            (TransactionStatus::RolledBack, tx.rollback())
        };

        match result {
            Ok(()) => {
                debug!("{} {status:?}", action.label());
                self.console.say(&status.to_string())
            }
            Err(e) => self.console.report_failure(
                &StoreError::database("Failed to finish transaction").with_source(e),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{DatabaseBuilder, Table};
    use tempfile::TempDir;

    fn test_db(temp_dir: &TempDir) -> Database {
        let mut db = DatabaseBuilder::new()
            .with_database_path(Some(temp_dir.path().join("shop.db")))
            .build()
            .expect("Failed to create database");
        db.ensure_schema().expect("Failed to create schema");
        db
    }

    /// Runs a whole session over `input` and returns what was printed.
    fn run_session(temp_dir: &TempDir, input: &str) -> String {
        let mut output = Vec::new();
        Menu::new(
            test_db(temp_dir),
            TerminalRenderer::new(false),
            input.as_bytes(),
            &mut output,
        )
        .run()
        .expect("Menu failed");
        String::from_utf8(output).expect("Output was not UTF-8")
    }

    /// Row count in a database file left behind by a finished session.
    fn count_rows(temp_dir: &TempDir, table: Table) -> i64 {
        Database::open(temp_dir.path().join("shop.db"))
            .expect("Failed to reopen database")
            .row_count(table)
            .expect("Failed to count rows")
    }

    #[test]
    fn test_menu_lists_every_action() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "0\n");

        assert!(output.starts_with("\n--- SQL Database Manager ---\n1. Add products\n"));
        assert!(output.contains("9. Update smartphone prices by 10%\n0. Exit\n"));
        assert!(output.contains(CHOICE_PROMPT));
        assert!(output.ends_with("Database connection closed.\n"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "42\n\n0\n");

        assert_eq!(output.matches("Invalid choice, please try again.").count(), 2);
        assert_eq!(output.matches(MENU_TITLE).count(), 3);
    }

    #[test]
    fn test_confirmed_changes_are_saved() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "1\ny\n2\nY\n3\ny\n0\n");

        assert!(output.contains("Executing: Add products...\n6 products added.\n"));
        assert!(output.contains("3 customers added."));
        assert!(output.contains("5 orders added."));
        assert_eq!(output.matches("Changes saved.").count(), 3);
        assert_eq!(count_rows(&temp_dir, Table::Orders), 5);
    }

    #[test]
    fn test_declined_changes_are_rolled_back() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "1\nn\n0\n");

        assert!(output.contains("6 products added."));
        assert!(output.contains(SAVE_PROMPT));
        assert!(output.contains("Changes rolled back."));
        assert_eq!(count_rows(&temp_dir, Table::Products), 0);
    }

    #[test]
    fn test_end_of_input_at_save_prompt_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "2\n");

        assert!(output.contains("Changes rolled back."));
        assert!(output.ends_with("Database connection closed.\n"));
        assert_eq!(count_rows(&temp_dir, Table::Customers), 0);
    }

    #[test]
    fn test_failed_action_skips_save_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "3\n0\n");

        assert!(output.contains("An error occurred: Failed to insert order: FOREIGN KEY constraint failed"));
        assert!(!output.contains(SAVE_PROMPT));
        assert_eq!(count_rows(&temp_dir, Table::Orders), 0);
    }

    #[test]
    fn test_reports_after_seeding() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "1\ny\n2\ny\n3\ny\n5\n7\n8\n0\n");

        assert!(output.contains("first_name | last_name | order_count\n"));
        assert!(output.contains("John | Doe | 2\n"));
        assert!(output.contains("Peter | Jones | 1\n"));
        assert!(output.contains("category | orders_in_category\n"));
        assert!(output.contains("smartphones | 3\n"));
        assert!(output.contains("laptops | 2\n"));
        assert_eq!(output.matches(SAVE_PROMPT).count(), 3);
    }

    #[test]
    fn test_report_on_empty_tables() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "8\n0\n");

        assert!(output.contains("Query executed, but no results were returned."));
    }

    #[test]
    fn test_price_update_reports_affected_rows() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_session(&temp_dir, "1\ny\n9\ny\n9\nn\n0\n");

        assert_eq!(output.matches("2 smartphone prices updated by 10%.").count(), 2);
        assert!(output.contains("Changes saved."));
        assert!(output.contains("Changes rolled back."));
    }
}
