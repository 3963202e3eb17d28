//! # catalog-core: Pure Business Logic for the Product Catalog
//!
//! This crate holds every rule of the catalog as plain data and pure
//! functions. The console app owns the event loop, timers and terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 catalog-console (apps/console)                  │   │
//! │  │   stdin ──► commands ──► CatalogState ──► render ──► stdout     │   │
//! │  │                 ▲                                               │   │
//! │  │                 └── debounce deadline (tokio time)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌─────────┐ ┌───────┐  │   │
//! │  │   │  types  │ │  draft  │ │validation │ │  query  │ │ store │  │   │
//! │  │   │ Product │ │ form    │ │ field     │ │ filter  │ │ CRUD  │  │   │
//! │  │   │ViewMode │ │ text    │ │ rules     │ │ paginate│ │ ids   │  │   │
//! │  │   └─────────┘ └─────────┘ └───────────┘ └─────────┘ └───────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and ViewMode
//! - [`draft`] - Free-text form draft and form fields
//! - [`validation`] - Draft validation and number coercion
//! - [`query`] - Filter and pagination pipeline
//! - [`view`] - Search/page/view-mode state and pagination buttons
//! - [`store`] - In-memory product collection
//! - [`seed`] - Embedded sample catalog
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::query::filter_and_paginate;
//! use catalog_core::{ProductStore, DEFAULT_PAGE_SIZE};
//!
//! let store = ProductStore::seeded().unwrap();
//! let page = filter_and_paginate(store.products(), "", 2, DEFAULT_PAGE_SIZE);
//!
//! assert_eq!(page.total_pages, 2);
//! assert_eq!(page.items.first().map(|p| p.id), Some(6));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod query;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use draft::{FormField, ProductDraft};
pub use error::{CoreError, CoreResult, FormErrors, ValidationError};
pub use query::PageResult;
pub use store::ProductStore;
pub use types::*;
pub use view::{PageControls, PageNav, ViewState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Quiet period after the last search keystroke before the query commits.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
