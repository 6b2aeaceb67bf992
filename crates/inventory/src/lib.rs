//! Inventory domain module.
//!
//! Item records, the in-memory store that owns them, the derived
//! (filtered + sorted) read view, and the form boundary that turns raw text
//! into validated drafts. Pure domain logic: no IO, no presentation.

pub mod form;
pub mod item;
pub mod seed;
pub mod store;
pub mod view;

pub use form::{ItemForm, ValidationError};
pub use item::{Item, ItemDraft, LOW_STOCK_THRESHOLD, Price};
pub use seed::seed_items;
pub use store::InventoryStore;
pub use view::{ALL_CATEGORIES, CategoryFilter, SortDirection, ViewParams, category_roster, derive_view};
