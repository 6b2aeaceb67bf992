//! Form boundary: raw text fields in, validated [`ItemDraft`] out.
//!
//! Parsing happens before any store mutation, so malformed input never
//! reaches the collection.

use thiserror::Error;

use stockroom_core::DomainError;

use crate::item::{Item, ItemDraft, Price};
use crate::view::ALL_CATEGORIES;

/// Why a submitted form was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("category cannot be empty")]
    EmptyCategory,

    #[error("category {0:?} is reserved")]
    ReservedCategory(String),

    #[error("quantity must be a whole number of at least 0, got {0:?}")]
    InvalidQuantity(String),

    #[error("price must be a non-negative amount with at most two decimals, got {0:?}")]
    InvalidPrice(String),
}

impl From<ValidationError> for DomainError {
    fn from(value: ValidationError) -> Self {
        DomainError::validation(value.to_string())
    }
}

/// The four text fields of the add/edit form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

impl ItemForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Pre-filled form for editing an existing item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category().to_string(),
            quantity: item.quantity().to_string(),
            price: item.price().to_string(),
        }
    }

    /// Validate every field, reporting the first failure in form order.
    pub fn parse(&self) -> Result<ItemDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if category == ALL_CATEGORIES {
            return Err(ValidationError::ReservedCategory(category.to_string()));
        }

        let quantity = parse_quantity(&self.quantity)?;

        let price = self
            .price
            .trim()
            .parse::<Price>()
            .map_err(|_| ValidationError::InvalidPrice(self.price.clone()))?;

        Ok(ItemDraft::new(name, category, quantity, price))
    }
}

fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    // `u32::from_str` tolerates a leading '+'; the form does not.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidQuantity(raw.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{IdGenerator, SequentialIds};

    #[test]
    fn parses_a_well_formed_form() {
        let draft = ItemForm::new("Keyboard", "Electronics", "3", "49.99").parse().unwrap();
        assert_eq!(
            draft,
            ItemDraft::new("Keyboard", "Electronics", 3, Price::from_cents(4999))
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let draft = ItemForm::new("  Desk Chair ", " Furniture", " 12 ", " 199.99 ")
            .parse()
            .unwrap();
        assert_eq!(draft.name, "Desk Chair");
        assert_eq!(draft.category, "Furniture");
        assert_eq!(draft.quantity, 12);
        assert_eq!(draft.price, Price::from_cents(19999));
    }

    #[test]
    fn rejects_blank_name() {
        let err = ItemForm::new("   ", "Electronics", "1", "1").parse().unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn rejects_blank_category() {
        let err = ItemForm::new("Mouse", "", "1", "1").parse().unwrap_err();
        assert_eq!(err, ValidationError::EmptyCategory);
    }

    #[test]
    fn rejects_sentinel_category() {
        let err = ItemForm::new("Mouse", "all", "1", "1").parse().unwrap_err();
        assert_eq!(err, ValidationError::ReservedCategory("all".to_string()));

        // Only the exact sentinel is reserved.
        assert!(ItemForm::new("Mouse", "All", "1", "1").parse().is_ok());
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        for raw in ["", "abc", "-1", "+1", "1.5", "4294967296"] {
            let err = ItemForm::new("Mouse", "Electronics", raw, "1").parse().unwrap_err();
            assert_eq!(err, ValidationError::InvalidQuantity(raw.to_string()));
        }
    }

    #[test]
    fn rejects_bad_price() {
        for raw in ["", "free", "-3", "1.999"] {
            let err = ItemForm::new("Mouse", "Electronics", "1", raw).parse().unwrap_err();
            assert_eq!(err, ValidationError::InvalidPrice(raw.to_string()));
        }
    }

    #[test]
    fn reports_first_failure_in_form_order() {
        let err = ItemForm::new("", "", "x", "y").parse().unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn prefilled_form_parses_back_to_same_draft() {
        let id = SequentialIds::new().next_id();
        let item = Item::new(id, ItemDraft::new("Laptop", "Electronics", 5, Price::from_cents(99999)));
        let form = ItemForm::from_item(&item);
        assert_eq!(form.price, "999.99");
        assert_eq!(form.parse().unwrap(), item.draft());
    }

    #[test]
    fn converts_into_domain_error() {
        let err: DomainError = ValidationError::EmptyName.into();
        assert_eq!(err, DomainError::Validation("name cannot be empty".to_string()));
    }
}
