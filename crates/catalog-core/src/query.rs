//! # Query Pipeline
//!
//! Filter → paginate over the product list. Pure functions only; the
//! debounce step that feeds the query lives in the app layer.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  products ──► filter_products(query) ──► filtered (store order)        │
//! │                    │                          │                         │
//! │                    │ blank query = no filter  ▼                         │
//! │                    │               total_pages(len, page_size)          │
//! │                    │                          │                         │
//! │                    ▼                          ▼                         │
//! │            case-insensitive        filtered[(page-1)*size .. page*size] │
//! │            substring on name                  │                         │
//! │                                               ▼                         │
//! │                                          PageResult                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Product;

/// One page of the filtered product list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// Products on the requested page, in store order.
    pub items: Vec<Product>,
    /// The page that was requested (not clamped).
    pub page: usize,
    /// `max(1, ceil(total_matches / page_size))`
    pub total_pages: usize,
    /// Number of products matching the query across all pages.
    pub total_matches: usize,
}

impl PageResult {
    /// True when the requested page holds no products.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Normalizes raw search-box text into the effective query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_string()
}

/// Returns products whose name contains `query`, ignoring case.
///
/// A blank query returns every product.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    products.iter().filter(|p| p.name_contains(&needle)).collect()
}

/// Number of pages needed for `count` items. Never less than one.
///
/// ## Example
/// ```rust
/// use catalog_core::query::total_pages;
///
/// assert_eq!(total_pages(0, 5), 1);
/// assert_eq!(total_pages(10, 5), 2);
/// assert_eq!(total_pages(11, 5), 3);
/// ```
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Filters `products` by `query` and cuts out page `page` (1-based).
///
/// Out-of-range pages, including page 0, yield an empty page. A zero
/// `page_size` is treated as one.
///
/// ## Example
/// ```rust
/// use catalog_core::query::filter_and_paginate;
/// use catalog_core::seed::sample_products;
///
/// let products = sample_products().unwrap();
/// let result = filter_and_paginate(&products, "pen", 1, 5);
///
/// assert_eq!(result.items.len(), 1);
/// assert_eq!(result.items[0].id, 7);
/// assert_eq!(result.total_pages, 1);
/// ```
pub fn filter_and_paginate(
    products: &[Product],
    query: &str,
    page: usize,
    page_size: usize,
) -> PageResult {
    let page_size = page_size.max(1);
    let filtered = filter_products(products, query);
    let total_matches = filtered.len();

    let items = match page.checked_sub(1) {
        Some(index) => filtered
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    PageResult {
        items,
        page,
        total_pages: total_pages(total_matches, page_size),
        total_matches,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_products;

    fn ids(result: &PageResult) -> Vec<u64> {
        result.items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let products = sample_products().unwrap();
        assert_eq!(filter_products(&products, "").len(), 10);
        assert_eq!(filter_products(&products, "   ").len(), 10);
    }

    #[test]
    fn test_filter_matches_name_only() {
        let products = sample_products().unwrap();

        // "Home" is a category, never a name
        assert!(filter_products(&products, "home").is_empty());

        let matches = filter_products(&products, "BOTTLE");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);
    }

    #[test]
    fn test_every_match_contains_query() {
        let products = sample_products().unwrap();
        for query in ["a", "o", "Sh", "lamp", "zz"] {
            let needle = query.to_lowercase();
            for product in filter_products(&products, query) {
                assert!(product.name.to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn test_query_is_trimmed() {
        let products = sample_products().unwrap();
        let result = filter_and_paginate(&products, "  mug ", 1, 5);
        assert_eq!(ids(&result), vec![10]);
    }

    #[test]
    fn test_pen_example() {
        let products = sample_products().unwrap();
        let result = filter_and_paginate(&products, "pen", 1, 5);
        assert_eq!(ids(&result), vec![7]);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_matches, 1);
    }

    #[test]
    fn test_second_page_example() {
        let products = sample_products().unwrap();
        let result = filter_and_paginate(&products, "", 2, 5);
        assert_eq!(ids(&result), vec![6, 7, 8, 9, 10]);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn test_total_pages_formula() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn test_no_matches_still_one_page() {
        let products = sample_products().unwrap();
        let result = filter_and_paginate(&products, "zzz", 1, 5);
        assert!(result.is_empty());
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let products = sample_products().unwrap();
        assert!(filter_and_paginate(&products, "", 0, 5).is_empty());
        assert!(filter_and_paginate(&products, "", 3, 5).is_empty());
        assert!(filter_and_paginate(&products, "", usize::MAX, 5).is_empty());
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let products = sample_products().unwrap();
        let first = filter_and_paginate(&products, "o", 2, 3);
        let second = filter_and_paginate(&products, "o", 2, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
