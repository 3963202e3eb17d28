//! # Product Store
//!
//! The ordered, in-memory product collection and its mutations.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  Form "Save" (add)  ──► insert(draft) ──► validate ──► prepend          │
//! │                                                 └─────► id = next_id++  │
//! │                                                                         │
//! │  Form "Save" (edit) ──► update(id, draft) ──► validate ──► replace      │
//! │                                                                         │
//! │  Row "Delete" + yes ──► remove(id)                                      │
//! │                                                                         │
//! │  Validation runs before anything is touched: a failed save never        │
//! │  leaves a partial write behind.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## ID Assignment
//! New IDs come from a counter kept next to the collection. It starts at
//! `max(existing id) + 1` and only moves forward, so an ID freed by a delete
//! is never handed out again.

use std::collections::HashSet;

use tracing::debug;

use crate::draft::ProductDraft;
use crate::error::{CoreError, CoreResult};
use crate::seed::sample_products;
use crate::types::{Product, ProductId};

/// In-memory product collection.
///
/// ## Invariants
/// - IDs are unique
/// - `next_id` is greater than every ID ever stored
#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: ProductId,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    /// Creates an empty store. The first product gets ID 1.
    pub fn new() -> Self {
        ProductStore {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a store from existing records, keeping their order.
    ///
    /// ## Returns
    /// * `Err(CoreError::DuplicateProductId)` - two records share an ID
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
        }

        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Ok(ProductStore { products, next_id })
    }

    /// Store holding the sample catalog.
    pub fn seeded() -> CoreResult<Self> {
        Self::from_products(sample_products()?)
    }

    /// All products in display order (newest additions first).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The ID the next inserted product will receive.
    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    /// Validates a new-product draft and prepends the result.
    ///
    /// Any ID on the draft is ignored; a fresh one is assigned.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{FormField, ProductDraft, ProductStore};
    ///
    /// let mut store = ProductStore::seeded().unwrap();
    /// let mut draft = ProductDraft::empty();
    /// draft.set(FormField::Name, "Stapler");
    /// draft.set(FormField::Price, "120");
    /// draft.set(FormField::Category, "Stationery");
    ///
    /// let product = store.insert(&draft).unwrap();
    /// assert_eq!(product.id, 11);
    /// assert_eq!(store.products()[0].name, "Stapler");
    /// ```
    pub fn insert(&mut self, draft: &ProductDraft) -> CoreResult<Product> {
        let draft = ProductDraft {
            id: None,
            ..draft.clone()
        };
        let product = draft.to_product(self.next_id)?;

        self.next_id += 1;
        self.products.insert(0, product.clone());

        debug!(id = product.id, name = %product.name, "Inserted product");
        Ok(product)
    }

    /// Validates a draft and replaces the product with ID `id` in place.
    ///
    /// ## Returns
    /// * `Err(CoreError::Validation)` - draft invalid, store unchanged
    /// * `Err(CoreError::ProductNotFound)` - no product with that ID
    pub fn update(&mut self, id: ProductId, draft: &ProductDraft) -> CoreResult<Product> {
        let draft = ProductDraft {
            id: Some(id),
            ..draft.clone()
        };
        let product = draft.to_product(id)?;

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;
        *slot = product.clone();

        debug!(id, name = %product.name, "Updated product");
        Ok(product)
    }

    /// Saves a form draft: update when it carries an ID, insert otherwise.
    pub fn save(&mut self, draft: &ProductDraft) -> CoreResult<Product> {
        match draft.id {
            Some(id) => self.update(id, draft),
            None => self.insert(draft),
        }
    }

    /// Removes the product with ID `id` and returns it.
    pub fn remove(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        let removed = self.products.remove(index);
        debug!(id, name = %removed.name, "Removed product");
        Ok(removed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
