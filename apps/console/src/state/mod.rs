//! # Application State
//!
//! - [`ConfigState`]: read-only settings loaded once at startup
//! - [`CatalogState`]: the store, view state, open form and pending delete,
//!   owned and mutated by the event loop

mod catalog;
mod config;

pub use catalog::{CatalogState, FormState};
pub use config::ConfigState;
