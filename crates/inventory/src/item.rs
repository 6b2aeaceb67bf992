//! Item records, editable drafts, prices and the low-stock rule.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, ItemId, ValueObject};

/// Items holding fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Non-negative money amount in the smallest currency unit (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

/// Renders with exactly two decimals (`999.99`, `5.00`).
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parses `12`, `12.5` or `12.50`; signs, exponents and sub-cent digits are
/// rejected.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("invalid price: {s:?}"));

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let cents_part = match frac {
            None => 0,
            Some(frac) if (1..=2).contains(&frac.len()) && frac.bytes().all(|b| b.is_ascii_digit()) => {
                let digits: u64 = frac.parse().map_err(|_| invalid())?;
                if frac.len() == 1 { digits * 10 } else { digits }
            }
            Some(_) => return Err(invalid()),
        };

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .map(Price)
            .ok_or_else(invalid)
    }
}

/// A candidate item that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Price,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: Price,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }
}

/// One inventory record.
///
/// The id is fixed at construction; every other field is replaced wholesale
/// by an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: String,
    quantity: u32,
    price: Price,
}

impl Item {
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        let ItemDraft {
            name,
            category,
            quantity,
            price,
        } = draft;
        Self {
            id,
            name,
            category,
            quantity,
            price,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Copy of the editable fields, e.g. to pre-fill an edit form.
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
