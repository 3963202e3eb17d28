//! # Console Commands
//!
//! Every input line is one UI event. This module parses lines into
//! [`Command`]s and dispatches them to the handlers.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing, dispatch, help)
//! ├── product.rs  ◄─── Add / edit / delete, form fields, save / cancel
//! └── view.rs     ◄─── Search box, view mode, pagination
//! ```
//!
//! ## How a Line Is Handled
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "delete 4"                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  handle_line()                                                          │
//! │       │                                                                 │
//! │       ├── delete awaiting y/N? ──► the line is the answer               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::parse() ──► Command::Delete(4)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dispatch() ──► form open? only form commands allowed                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  product::request_delete() ──► Outcome { redraw, message, ... }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod view;

use catalog_core::{FormField, PageNav, ProductId, ViewMode};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::state::CatalogState;

/// Usage text for `help`.
pub const HELP: &str = "\
Commands:
  search <text>        type into the search box (no text clears it)
  list | cards         switch view mode
  first | prev | next | last
                       pagination
  add                  open the Add Product form
  edit <id>            open the Edit Product form
  delete <id>          delete a product (asks y/N)
  set <field> <value>  fill a form field: name, price, category, stock, description
  save | cancel        submit or close the form
  show                 redraw the screen
  help                 this text
  quit                 exit";

// =============================================================================
// Command
// =============================================================================

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the search box contents.
    Search(String),
    ViewMode(ViewMode),
    Page(PageNav),
    Add,
    Edit(ProductId),
    Delete(ProductId),
    /// Type into a form field.
    Set(FormField, String),
    Save,
    Cancel,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// ## Returns
    /// * `Ok(None)` - blank line
    /// * `Ok(Some(command))` - recognised command
    /// * `Err(AppError)` - `INVALID_COMMAND` with a hint
    ///
    /// ## Example
    /// ```rust
    /// use catalog_console::commands::Command;
    /// use catalog_core::FormField;
    ///
    /// let cmd = Command::parse("set price 12.50").unwrap();
    /// assert_eq!(cmd, Some(Command::Set(FormField::Price, "12.50".into())));
    /// ```
    pub fn parse(line: &str) -> AppResult<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_lowercase().as_str() {
            "search" | "s" => Command::Search(rest.to_string()),
            "list" | "table" => Command::ViewMode(ViewMode::List),
            "cards" | "card" | "grid" => Command::ViewMode(ViewMode::Card),
            "view" => Command::ViewMode(rest.parse().map_err(AppError::invalid_command)?),
            "first" => Command::Page(PageNav::First),
            "prev" | "previous" => Command::Page(PageNav::Prev),
            "next" => Command::Page(PageNav::Next),
            "last" => Command::Page(PageNav::Last),
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(parse_id(rest)?),
            "delete" | "del" | "rm" => Command::Delete(parse_id(rest)?),
            "set" => parse_set(rest)?,
            "save" => Command::Save,
            "cancel" | "close" => Command::Cancel,
            "show" | "refresh" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(AppError::invalid_command(format!(
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    other
                )))
            }
        };

        Ok(Some(command))
    }

    /// Commands that stay available while the form is open.
    fn allowed_with_form(&self) -> bool {
        matches!(
            self,
            Command::Set(..)
                | Command::Save
                | Command::Cancel
                | Command::Show
                | Command::Help
                | Command::Quit
        )
    }
}

fn parse_id(input: &str) -> AppResult<ProductId> {
    let input = input.trim().trim_start_matches('#');
    if input.is_empty() {
        return Err(AppError::invalid_command("Expected a product id"));
    }

    input
        .parse()
        .map_err(|_| AppError::invalid_command(format!("'{}' is not a product id", input)))
}

fn parse_set(rest: &str) -> AppResult<Command> {
    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    };

    if field.is_empty() {
        return Err(AppError::invalid_command(
            "Usage: set <field> <value> (name, price, category, stock, description)",
        ));
    }

    let field: FormField = field
        .to_lowercase()
        .parse()
        .map_err(AppError::invalid_command)?;

    Ok(Command::Set(field, value.to_string()))
}

/// Reads a delete confirmation answer. Only `y` / `yes` confirm.
pub fn parse_confirmation(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

// =============================================================================
// Outcome
// =============================================================================

/// What the event loop should do after a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Redraw the whole screen.
    pub redraw: bool,
    /// One-line status message printed after the screen.
    pub message: Option<String>,
    /// Restart the search debounce window.
    pub debounce: bool,
    /// Leave the event loop.
    pub quit: bool,
}

impl Outcome {
    pub fn redraw() -> Self {
        Outcome {
            redraw: true,
            ..Default::default()
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Outcome {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn debounce() -> Self {
        Outcome {
            debounce: true,
            ..Default::default()
        }
    }

    pub fn quit() -> Self {
        Outcome {
            quit: true,
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Handles one raw input line.
///
/// While a delete is awaiting confirmation the line is the answer and is
/// not parsed as a command.
pub fn handle_line(state: &mut CatalogState, line: &str) -> AppResult<Outcome> {
    if state.pending_delete().is_some() {
        return product::confirm_delete(state, parse_confirmation(line));
    }

    match Command::parse(line)? {
        Some(command) => dispatch(state, command),
        None => Ok(Outcome::default()),
    }
}

/// Runs a parsed command against the state.
pub fn dispatch(state: &mut CatalogState, command: Command) -> AppResult<Outcome> {
    debug!(?command, "Dispatching command");

    if state.form().is_some() && !command.allowed_with_form() {
        return Err(AppError::invalid_state(
            "The product form is open. Use 'save' or 'cancel' first.",
        ));
    }

    match command {
        Command::Search(text) => Ok(view::search(state, text)),
        Command::ViewMode(mode) => Ok(view::set_view_mode(state, mode)),
        Command::Page(nav) => Ok(view::navigate(state, nav)),
        Command::Add => Ok(product::open_add(state)),
        Command::Edit(id) => product::open_edit(state, id),
        Command::Delete(id) => product::request_delete(state, id),
        Command::Set(field, value) => product::set_field(state, field, value),
        Command::Save => product::save(state),
        Command::Cancel => product::cancel(state),
        Command::Show => Ok(Outcome::redraw()),
        Command::Help => Ok(Outcome::message(HELP)),
        Command::Quit => Ok(Outcome::quit()),
    }
}
