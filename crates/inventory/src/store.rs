//! In-memory inventory store: the single owner of the item list.

use std::cell::OnceCell;

use stockroom_core::{DomainError, DomainResult, Entity, IdGenerator, ItemId, RandomIds};

use crate::item::{Item, ItemDraft};
use crate::seed::seed_items;
use crate::view::{CategoryFilter, SortDirection, ViewParams, category_roster, derive_view};

/// Ordered item collection plus the view parameters applied to it.
///
/// All writes go through [`add`](Self::add), [`update`](Self::update) and
/// [`remove`](Self::remove); all presentation reads go through
/// [`view`](Self::view). The derived view is memoized and dropped whenever
/// the items or the view parameters change.
#[derive(Debug)]
pub struct InventoryStore<G = RandomIds> {
    items: Vec<Item>,
    params: ViewParams,
    ids: G,
    view: OnceCell<Vec<Item>>,
}

impl InventoryStore<RandomIds> {
    /// Empty store minting UUIDv7 ids.
    pub fn new() -> Self {
        Self::with_generator(RandomIds)
    }

    /// Store holding the start-up seed items.
    pub fn seeded() -> Self {
        Self::seeded_with(RandomIds)
    }
}

impl Default for InventoryStore<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InventoryStore<G> {
    pub fn with_generator(ids: G) -> Self {
        Self {
            items: Vec::new(),
            params: ViewParams::default(),
            ids,
            view: OnceCell::new(),
        }
    }

    pub fn seeded_with(ids: G) -> Self {
        let mut store = Self::with_generator(ids);
        for draft in seed_items() {
            store.add(draft);
        }
        store
    }

    /// Assign a fresh id and append the item at the end of insertion order.
    pub fn add(&mut self, draft: ItemDraft) -> &Item {
        let id = self.fresh_id();
        tracing::debug!(item_id = %id, name = %draft.name, "adding item");
        self.items.push(Item::new(id, draft));
        self.invalidate();
        &self.items[self.items.len() - 1]
    }

    /// Replace the item with the same id, keeping its position.
    ///
    /// Unknown ids leave the store untouched; the return value reports whether
    /// anything was replaced.
    pub fn update(&mut self, item: Item) -> bool {
        let Some(slot) = self.items.iter_mut().find(|i| i.id() == item.id()) else {
            tracing::debug!(item_id = %item.id_typed(), "update ignored: unknown item");
            return false;
        };
        tracing::debug!(item_id = %item.id_typed(), "updating item");
        *slot = item;
        self.invalidate();
        true
    }

    /// Remove the item with `id`, if held.
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let Some(pos) = self.items.iter().position(|i| i.id() == id) else {
            tracing::debug!(item_id = %id, "remove ignored: unknown item");
            return None;
        };
        tracing::debug!(item_id = %id, "removing item");
        let removed = self.items.remove(pos);
        self.invalidate();
        Some(removed)
    }

    fn fresh_id(&mut self) -> ItemId {
        loop {
            let id = self.ids.next_id();
            if !self.contains(&id) {
                return id;
            }
            tracing::warn!(item_id = %id, "generated id already in use; drawing another");
        }
    }
}

impl<G> InventoryStore<G> {
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Items in insertion order (unfiltered, unsorted).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        if self.params.category != category {
            self.params.category = category;
            self.invalidate();
        }
    }

    pub fn set_sort(&mut self, sort: SortDirection) {
        if self.params.sort != sort {
            self.params.sort = sort;
            self.invalidate();
        }
    }

    /// Flip the quantity sort and return the new direction.
    pub fn toggle_sort(&mut self) -> SortDirection {
        let next = self.params.sort.toggled();
        self.set_sort(next);
        next
    }

    /// Filtered + sorted projection for the current parameters.
    pub fn view(&self) -> &[Item] {
        self.view.get_or_init(|| {
            tracing::trace!(
                category = %self.params.category,
                sort = ?self.params.sort,
                "recomputing derived view"
            );
            derive_view(&self.items, &self.params)
        })
    }

    /// Category roster of the current items.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        category_roster(&self.items)
    }

    /// Look up an item by full id or by a unique trailing run of its digits.
    pub fn resolve(&self, handle: &str) -> DomainResult<&Item> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(DomainError::invalid_id("empty item id"));
        }

        let mut matches = self.items.iter().filter(|i| i.id_typed().matches_handle(handle));
        let first = matches.next().ok_or_else(DomainError::not_found)?;
        if matches.next().is_some() {
            return Err(DomainError::invalid_id(format!("{handle:?} matches more than one item")));
        }
        Ok(first)
    }

    fn invalidate(&mut self) {
        self.view.take();
    }
}
