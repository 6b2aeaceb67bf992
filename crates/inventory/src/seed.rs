//! Fixed start-up data.

use crate::item::{ItemDraft, Price};

/// The items every fresh process starts with, in insertion order.
pub fn seed_items() -> Vec<ItemDraft> {
    vec![
        ItemDraft::new("Laptop", "Electronics", 5, Price::from_cents(99_999)),
        ItemDraft::new("Desk Chair", "Furniture", 12, Price::from_cents(19_999)),
        ItemDraft::new("Mouse", "Electronics", 8, Price::from_cents(2_999)),
    ]
}
