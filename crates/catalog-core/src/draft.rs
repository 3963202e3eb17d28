//! # Form Draft
//!
//! The unsaved, free-text copy of a product that the add/edit form works on.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "+ Add Product" ──► ProductDraft::empty()          (id = None)         │
//! │  "Edit" on a row ──► ProductDraft::from_product(p)  (id = Some(p.id))   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  set(field, text) ... set(field, text)      ◄── every keystroke         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  to_product(id) ── validation fails ──► FormErrors (nothing written)    │
//! │        │                                                                │
//! │        └── ok ──► Product (numbers coerced) ──► ProductStore            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CoreResult;
use crate::types::{Product, ProductId};
use crate::validation::coerce_draft;

// =============================================================================
// Form Field
// =============================================================================

/// The editable inputs of the product form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Price,
    Category,
    Stock,
    Description,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Price,
        FormField::Category,
        FormField::Stock,
        FormField::Description,
    ];

    /// Lowercase key used in commands and error summaries.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Category => "category",
            FormField::Stock => "stock",
            FormField::Description => "description",
        }
    }

    /// Whether the form marks this field with `*`.
    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Price | FormField::Category)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::Category => "Category",
            FormField::Stock => "Stock",
            FormField::Description => "Description",
        };
        f.write_str(label)
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        FormField::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| format!("Unknown field: {}", s.trim()))
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Staging copy of a product. Every field is raw text until save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// `Some` when editing an existing product, `None` for a new one.
    pub id: Option<ProductId>,
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub description: String,
}

impl ProductDraft {
    /// The blank template used by "+ Add Product".
    pub fn empty() -> Self {
        ProductDraft::default()
    }

    /// Seeds a draft from a product's current values.
    pub fn from_product(product: &Product) -> Self {
        ProductDraft {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
        }
    }

    /// True when this draft edits an existing product.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Returns the raw text of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
            FormField::Stock => &self.stock,
            FormField::Description => &self.description,
        }
    }

    /// Replaces the raw text of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Category => self.category = value,
            FormField::Stock => self.stock = value,
            FormField::Description => self.description = value,
        }
    }

    /// Validates the draft and builds the product it describes.
    ///
    /// `id` is used for new products; edit drafts keep their own ID.
    /// Text fields are stored as typed, numbers are coerced.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{FormField, ProductDraft};
    ///
    /// let mut draft = ProductDraft::empty();
    /// draft.set(FormField::Name, "Stapler");
    /// draft.set(FormField::Price, "120");
    /// draft.set(FormField::Category, "Stationery");
    ///
    /// let product = draft.to_product(11).unwrap();
    /// assert_eq!(product.id, 11);
    /// assert_eq!(product.stock, 0);
    /// ```
    pub fn to_product(&self, id: ProductId) -> CoreResult<Product> {
        let numbers = coerce_draft(self)?;

        Ok(Product {
            id: self.id.unwrap_or(id),
            name: self.name.clone(),
            price: numbers.price,
            category: self.category.clone(),
            stock: numbers.stock,
            description: self.description.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
