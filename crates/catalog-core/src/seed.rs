//! # Seed Data
//!
//! The sample catalog every session starts from.
//!
//! Products:
//! - Electronics: Wireless Mouse, Bluetooth Speaker
//! - Home: Water Bottle, Desk Lamp, Coffee Mug
//! - Stationery: Notebook, Ballpoint Pen
//! - Fashion: Running Shoes, Sunglasses, Backpack

use tracing::debug;

use crate::error::CoreResult;
use crate::types::Product;

/// Sample catalog, embedded at compile time.
const SAMPLE_PRODUCTS_JSON: &str = include_str!("../data/sample_products.json");

/// Decodes the embedded sample catalog (ids 1 to 10, in id order).
pub fn sample_products() -> CoreResult<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(SAMPLE_PRODUCTS_JSON)?;
    debug!(count = products.len(), "Decoded sample products");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_decode() {
        let products = sample_products().unwrap();
        assert_eq!(products.len(), 10);

        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_sample_product_fields() {
        let products = sample_products().unwrap();
        let pen = &products[6];
        assert_eq!(pen.name, "Ballpoint Pen");
        assert_eq!(pen.price, 15.0);
        assert_eq!(pen.category, "Stationery");
        assert_eq!(pen.stock, 1000);
        assert_eq!(pen.description, "Smooth writing pen");
    }
}
