//! # Product Commands
//!
//! Add, edit and delete, plus the form that stages add/edit.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Form Lifecycle                               │
//! │                                                                         │
//! │  ┌──────────┐  add / edit <id>  ┌──────────┐   save (valid)   ┌───────┐ │
//! │  │  Closed  │──────────────────►│   Open   │─────────────────►│ Saved │ │
//! │  └──────────┘                   └──────────┘                  └───┬───┘ │
//! │       ▲                          │   ▲    │                       │     │
//! │       │                    set   │   │    │ save (invalid)        │     │
//! │       │                   field  └───┘    ▼                       │     │
//! │       │                            inline errors, stays open      │     │
//! │       │                                                           │     │
//! │       └──────────────── cancel ◄──── Open ─────────────────────────┘     │
//! │                                        (form closed, errors cleared)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::{FormField, ProductId};
use tracing::info;

use super::Outcome;
use crate::error::{AppResult, ErrorCode};
use crate::state::CatalogState;

/// `+ Add Product`: opens the form on an empty draft.
pub fn open_add(state: &mut CatalogState) -> Outcome {
    state.open_add();
    Outcome::redraw()
}

/// Row `Edit`: opens the form seeded from the product.
pub fn open_edit(state: &mut CatalogState, id: ProductId) -> AppResult<Outcome> {
    state.open_edit(id)?;
    Ok(Outcome::redraw())
}

/// Types into one form field.
pub fn set_field(
    state: &mut CatalogState,
    field: FormField,
    value: String,
) -> AppResult<Outcome> {
    state.edit_field(field, value)?;
    Ok(Outcome::redraw())
}

/// Form `Save`.
///
/// A draft that fails validation is not an error for the loop: the form
/// is redrawn with its inline errors and a status line.
pub fn save(state: &mut CatalogState) -> AppResult<Outcome> {
    let was_edit = state.form().is_some_and(|form| form.draft.is_edit());

    match state.save_form() {
        Ok(product) => {
            let verb = if was_edit { "Updated" } else { "Added" };
            Ok(Outcome::redraw().with_message(format!(
                "{} product #{} {}",
                verb, product.id, product.name
            )))
        }
        Err(e) if e.code == ErrorCode::ValidationError => {
            Ok(Outcome::redraw().with_message(e.to_string()))
        }
        Err(e) => Err(e),
    }
}

/// Form `Cancel`.
pub fn cancel(state: &mut CatalogState) -> AppResult<Outcome> {
    if state.form().is_none() {
        return Ok(Outcome::message("No form is open"));
    }

    state.close_form();
    Ok(Outcome::redraw())
}

/// Row `Delete`: asks for confirmation before anything is removed.
pub fn request_delete(state: &mut CatalogState, id: ProductId) -> AppResult<Outcome> {
    let product = state.request_delete(id)?;
    info!(id, name = %product.name, "Delete requested");
    Ok(Outcome::redraw())
}

/// Answers the pending delete prompt.
pub fn confirm_delete(state: &mut CatalogState, confirmed: bool) -> AppResult<Outcome> {
    let outcome = match state.resolve_delete(confirmed)? {
        Some(product) => Outcome::redraw()
            .with_message(format!("Deleted product #{} {}", product.id, product.name)),
        None => Outcome::redraw().with_message("Delete cancelled"),
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use catalog_core::ProductStore;

    fn seeded() -> CatalogState {
        CatalogState::new(ProductStore::seeded().unwrap(), &ConfigState::default())
    }

    #[test]
    fn test_save_reports_added() {
        let mut state = seeded();
        open_add(&mut state);
        set_field(&mut state, FormField::Name, "Stapler".into()).unwrap();
        set_field(&mut state, FormField::Price, "120".into()).unwrap();
        set_field(&mut state, FormField::Category, "Stationery".into()).unwrap();

        let outcome = save(&mut state).unwrap();
        assert!(outcome.redraw);
        assert_eq!(outcome.message.as_deref(), Some("Added product #11 Stapler"));
    }

    #[test]
    fn test_save_reports_updated() {
        let mut state = seeded();
        open_edit(&mut state, 6).unwrap();
        set_field(&mut state, FormField::Price, "949".into()).unwrap();

        let outcome = save(&mut state).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Updated product #6 Desk Lamp"));
        assert_eq!(state.store().get(6).unwrap().price, 949.0);
    }

    #[test]
    fn test_invalid_save_is_not_a_loop_error() {
        let mut state = seeded();
        open_add(&mut state);

        let outcome = save(&mut state).unwrap();
        assert!(outcome.redraw);
        assert!(outcome.message.unwrap().starts_with("[VALIDATION_ERROR]"));
        assert!(state.form().is_some());
    }

    #[test]
    fn test_edit_unknown_product() {
        let mut state = seeded();
        let err = open_edit(&mut state, 404).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_flow_messages() {
        let mut state = seeded();
        request_delete(&mut state, 9).unwrap();
        let outcome = confirm_delete(&mut state, false).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Delete cancelled"));

        request_delete(&mut state, 9).unwrap();
        let outcome = confirm_delete(&mut state, true).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Deleted product #9 Backpack"));
    }

    #[test]
    fn test_cancel_without_form() {
        let mut state = seeded();
        let outcome = cancel(&mut state).unwrap();
        assert!(!outcome.redraw);
    }
}
