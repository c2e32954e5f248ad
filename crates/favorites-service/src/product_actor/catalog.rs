//! Products every fresh catalog starts with.

use crate::model::ProductCreate;

/// `"1"` Laptop and `"2"` Mouse, with fixed ids so favorites can refer to them.
pub fn default_catalog() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new("Laptop", "High performance laptop", 1500.0, 50).with_id("1"),
        ProductCreate::new("Mouse", "Wireless mouse", 50.0, 200).with_id("2"),
    ]
}
