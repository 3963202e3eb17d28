//! # Domain Types
//!
//! Core domain types used throughout the catalog.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │    ViewMode     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  free-text      │   │  List           │       │
//! │  │  name           │   │  copy of every  │   │  Card           │       │
//! │  │  price          │   │  field, edited  │   │                 │       │
//! │  │  category       │   │  before save    │   │                 │       │
//! │  │  stock          │   │  (draft.rs)     │   │                 │       │
//! │  │  description    │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product identity. Unique within a store and never reused.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Display name. The only field search looks at.
    pub name: String,

    /// Unit price in the display currency.
    pub price: f64,

    /// Free-form category label (e.g. "Electronics").
    pub category: String,

    /// Units on hand.
    pub stock: i64,

    /// Longer text shown on the card view.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

// =============================================================================
// View Mode
// =============================================================================

/// Which presentation the product page uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Tabular listing, one row per product.
    #[default]
    List,
    /// Card grid.
    Card,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::List => f.write_str("list"),
            ViewMode::Card => f.write_str("card"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" | "table" => Ok(ViewMode::List),
            "card" | "cards" | "grid" => Ok(ViewMode::Card),
            other => Err(format!("Unknown view mode: {}", other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
