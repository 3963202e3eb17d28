//! # Catalog State
//!
//! The single application-state struct the event loop owns: product store,
//! view state, the open form (if any) and a pending delete confirmation.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Operations                             │
//! │                                                                         │
//! │  UI Event                 Operation                State Change         │
//! │  ────────                 ─────────                ────────────         │
//! │                                                                         │
//! │  Type in search ─────────► type_search() ────────► search_query, page=1 │
//! │  Debounce fires ─────────► commit_search() ──────► debounced_query      │
//! │  Pagination button ──────► navigate() ───────────► current_page         │
//! │  "+ Add Product" ────────► open_add() ───────────► form = empty draft   │
//! │  Row "Edit" ─────────────► open_edit(id) ────────► form = row's values  │
//! │  Form input ─────────────► edit_field() ─────────► draft field          │
//! │  Form "Save" ────────────► save_form() ──────────► store + form closed  │
//! │  Row "Delete" ───────────► request_delete(id) ───► pending_delete       │
//! │  y / N ──────────────────► resolve_delete() ─────► store (if yes)       │
//! │                                                                         │
//! │  Every store change re-clamps current_page to [1, total_pages].        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::query::{filter_and_paginate, filter_products, total_pages};
use catalog_core::{
    CoreError, FormErrors, FormField, PageControls, PageNav, PageResult, Product, ProductDraft,
    ProductId, ProductStore, ViewMode, ViewState,
};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::state::ConfigState;

// =============================================================================
// Form State
// =============================================================================

/// The open add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub draft: ProductDraft,
    /// Errors from the last failed save. Shown inline until the next save
    /// attempt or until the form closes.
    pub errors: FormErrors,
}

impl FormState {
    fn new(draft: ProductDraft) -> Self {
        FormState {
            draft,
            errors: FormErrors::new(),
        }
    }

    /// Modal title.
    pub fn title(&self) -> &'static str {
        if self.draft.is_edit() {
            "Edit Product"
        } else {
            "Add Product"
        }
    }
}

// =============================================================================
// Catalog State
// =============================================================================

/// Everything the screen is drawn from.
#[derive(Debug, Clone)]
pub struct CatalogState {
    store: ProductStore,
    view: ViewState,
    form: Option<FormState>,
    pending_delete: Option<ProductId>,
    page_size: usize,
}

impl CatalogState {
    /// Creates the state with the given store and configured defaults.
    pub fn new(store: ProductStore, config: &ConfigState) -> Self {
        CatalogState {
            store,
            view: ViewState::new(config.default_view),
            form: None,
            pending_delete: None,
            page_size: config.page_size.max(1),
        }
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn pending_delete(&self) -> Option<ProductId> {
        self.pending_delete
    }

    // =========================================================================
    // Query Pipeline
    // =========================================================================

    /// The page currently on screen.
    pub fn current_page(&self) -> PageResult {
        filter_and_paginate(
            self.store.products(),
            &self.view.debounced_query,
            self.view.current_page,
            self.page_size,
        )
    }

    /// Page count for the effective query.
    pub fn total_pages(&self) -> usize {
        let matches = filter_products(self.store.products(), &self.view.debounced_query).len();
        total_pages(matches, self.page_size)
    }

    /// Pagination buttons for the current page.
    pub fn page_controls(&self) -> PageControls {
        PageControls::new(self.view.current_page, self.total_pages())
    }

    /// True while typed search text has not been committed yet.
    pub fn search_pending(&self) -> bool {
        self.view.search_query.trim() != self.view.debounced_query
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.view.clamp_page(total);
    }

    // =========================================================================
    // View Operations
    // =========================================================================

    /// Replaces the search box text and resets to page 1. The effective
    /// query only changes when [`commit_search`](Self::commit_search) runs.
    pub fn type_search(&mut self, raw: impl Into<String>) {
        self.view.set_search_query(raw);
        debug!(query = %self.view.search_query, "Search text changed");
    }

    /// Commits the search box text. Returns `true` if the result set changed.
    pub fn commit_search(&mut self) -> bool {
        let changed = self.view.commit_query();
        self.clamp_page();
        if changed {
            debug!(query = %self.view.debounced_query, "Search committed");
        }
        changed
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.view_mode = mode;
    }

    /// Applies a pagination button. Returns `false` if it was disabled.
    pub fn navigate(&mut self, nav: PageNav) -> bool {
        let total = self.total_pages();
        self.view.navigate(nav, total)
    }

    // =========================================================================
    // Form Operations
    // =========================================================================

    /// Opens the form with the empty template.
    pub fn open_add(&mut self) {
        self.form = Some(FormState::new(ProductDraft::empty()));
    }

    /// Opens the form seeded from product `id`.
    pub fn open_edit(&mut self, id: ProductId) -> AppResult<()> {
        let product = self.store.get(id).ok_or(CoreError::ProductNotFound(id))?;
        self.form = Some(FormState::new(ProductDraft::from_product(product)));
        Ok(())
    }

    /// Types into a form field.
    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) -> AppResult<()> {
        let form = self.form_mut()?;
        form.draft.set(field, value);
        Ok(())
    }

    /// Validates and saves the draft, then closes the form.
    ///
    /// On validation failure the form stays open with its errors filled in
    /// and the store is untouched.
    pub fn save_form(&mut self) -> AppResult<Product> {
        let form = self
            .form
            .as_mut()
            .ok_or_else(|| AppError::invalid_state("No form is open"))?;

        match self.store.save(&form.draft) {
            Ok(product) => {
                info!(id = product.id, name = %product.name, "Product saved");
                self.close_form();
                self.clamp_page();
                Ok(product)
            }
            Err(CoreError::Validation(errors)) => {
                debug!(fields = errors.len(), "Save blocked by validation");
                form.errors = errors.clone();
                Err(CoreError::Validation(errors).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Closes the form and clears its errors.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    fn form_mut(&mut self) -> AppResult<&mut FormState> {
        self.form
            .as_mut()
            .ok_or_else(|| AppError::invalid_state("No form is open"))
    }

    // =========================================================================
    // Delete Operations
    // =========================================================================

    /// Starts the delete confirmation for product `id`.
    pub fn request_delete(&mut self, id: ProductId) -> AppResult<&Product> {
        let product = self.store.get(id).ok_or(CoreError::ProductNotFound(id))?;
        self.pending_delete = Some(id);
        Ok(product)
    }

    /// Answers the pending confirmation.
    ///
    /// ## Returns
    /// * `Ok(Some(product))` - confirmed, product removed
    /// * `Ok(None)` - declined, nothing changed
    pub fn resolve_delete(&mut self, confirmed: bool) -> AppResult<Option<Product>> {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| AppError::invalid_state("No delete is awaiting confirmation"))?;

        if !confirmed {
            debug!(id, "Delete declined");
            return Ok(None);
        }

        let removed = self.store.remove(id)?;
        info!(id, name = %removed.name, "Product deleted");
        self.clamp_page();
        Ok(Some(removed))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
