//! Derived read view: category filter + quantity sort over the item list.

use std::collections::HashSet;

use stockroom_core::ValueObject;

use crate::item::Item;

/// Roster string standing for "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category selection for the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Interpret a roster string; `"all"` is the sentinel, anything else is
    /// an exact category name.
    pub fn from_roster(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Roster string for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(c) => c,
        }
    }

    /// Human label (the sentinel reads "All Categories").
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Categories",
            Self::Category(c) => c,
        }
    }

    /// Exact, case-sensitive category match.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => item.category() == c,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from_roster(value)
    }
}

/// Direction of the quantity sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Low to High",
            Self::Descending => "High to Low",
        }
    }
}

/// Presentation-side parameters of the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ViewParams {
    pub category: CategoryFilter,
    pub sort: SortDirection,
}

impl ViewParams {
    pub fn new(category: CategoryFilter, sort: SortDirection) -> Self {
        Self { category, sort }
    }
}

impl ValueObject for ViewParams {}

/// Filter then sort `items` by quantity.
///
/// Pure: the input slice is left untouched and a fresh list is returned.
/// The sort is stable in both directions, so items with equal quantity keep
/// their insertion order.
pub fn derive_view(items: &[Item], params: &ViewParams) -> Vec<Item> {
    let mut out: Vec<Item> = items
        .iter()
        .filter(|item| params.category.matches(item))
        .cloned()
        .collect();

    match params.sort {
        SortDirection::Ascending => out.sort_by(|a, b| a.quantity().cmp(&b.quantity())),
        SortDirection::Descending => out.sort_by(|a, b| b.quantity().cmp(&a.quantity())),
    }

    out
}

/// `All` followed by each distinct category in order of first appearance.
pub fn category_roster(items: &[Item]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut roster = vec![CategoryFilter::All];
    for item in items {
        if seen.insert(item.category()) {
            roster.push(CategoryFilter::Category(item.category().to_string()));
        }
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemDraft, Price};
    use stockroom_core::{IdGenerator, SequentialIds};

    fn items(rows: &[(&str, &str, u32)]) -> Vec<Item> {
        let mut ids = SequentialIds::new();
        rows.iter()
            .map(|(name, category, quantity)| {
                Item::new(
                    ids.next_id(),
                    ItemDraft::new(*name, *category, *quantity, Price::from_cents(100)),
                )
            })
            .collect()
    }

    fn names(view: &[Item]) -> Vec<&str> {
        view.iter().map(Item::name).collect()
    }

    #[test]
    fn default_params_show_everything_high_to_low() {
        let params = ViewParams::default();
        assert_eq!(params.category, CategoryFilter::All);
        assert_eq!(params.sort, SortDirection::Descending);
    }

    #[test]
    fn filters_by_exact_category() {
        let list = items(&[("a", "Tools", 1), ("b", "tools", 2), ("c", "Tools ", 3), ("d", "Tools", 4)]);
        let params = ViewParams::new("Tools".into(), SortDirection::Ascending);
        assert_eq!(names(&derive_view(&list, &params)), vec!["a", "d"]);
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let list = items(&[("a", "Tools", 1)]);
        let params = ViewParams::new("Garden".into(), SortDirection::Ascending);
        assert!(derive_view(&list, &params).is_empty());
    }

    #[test]
    fn ties_keep_insertion_order_both_ways() {
        let list = items(&[("a", "X", 5), ("b", "X", 1), ("c", "X", 5), ("d", "X", 1)]);

        let asc = derive_view(&list, &ViewParams::new(CategoryFilter::All, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["b", "d", "a", "c"]);

        let desc = derive_view(&list, &ViewParams::new(CategoryFilter::All, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn does_not_touch_input() {
        let list = items(&[("a", "X", 3), ("b", "X", 1)]);
        let before = list.clone();
        let _ = derive_view(&list, &ViewParams::default());
        assert_eq!(list, before);
    }

    #[test]
    fn roster_is_first_seen_order() {
        let list = items(&[("a", "Furniture", 1), ("b", "Electronics", 1), ("c", "Furniture", 1)]);
        let roster: Vec<String> = category_roster(&list).iter().map(ToString::to_string).collect();
        assert_eq!(roster, vec!["all", "Furniture", "Electronics"]);
    }

    #[test]
    fn roster_of_empty_list_is_just_the_sentinel() {
        assert_eq!(category_roster(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn roster_strings_round_trip() {
        assert_eq!(CategoryFilter::from_roster("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_roster("All"), CategoryFilter::Category("All".into()));
        assert_eq!(CategoryFilter::All.label(), "All Categories");
        assert_eq!(CategoryFilter::from_roster("Office").label(), "Office");
    }

    #[test]
    fn toggling_flips_direction() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.label(), "Low to High");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn row_strategy() -> impl Strategy<Value = Vec<(String, u32)>> {
            prop::collection::vec(("[A-C]", 0u32..20), 0..40)
        }

        fn build(rows: &[(String, u32)]) -> Vec<Item> {
            let mut ids = SequentialIds::new();
            rows.iter()
                .enumerate()
                .map(|(i, (category, quantity))| {
                    Item::new(
                        ids.next_id(),
                        ItemDraft::new(format!("item-{i}"), category.clone(), *quantity, Price::ZERO),
                    )
                })
                .collect()
        }

        fn position(list: &[Item], item: &Item) -> usize {
            list.iter().position(|i| i.id_typed() == item.id_typed()).unwrap()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: "all" keeps exactly the same items, correctly ordered.
            #[test]
            fn all_is_a_sorted_permutation(rows in row_strategy(), ascending in any::<bool>()) {
                let list = build(&rows);
                let sort = if ascending { SortDirection::Ascending } else { SortDirection::Descending };
                let view = derive_view(&list, &ViewParams::new(CategoryFilter::All, sort));

                prop_assert_eq!(view.len(), list.len());
                let mut got: Vec<_> = view.iter().map(Item::id_typed).collect();
                let mut want: Vec<_> = list.iter().map(Item::id_typed).collect();
                got.sort();
                want.sort();
                prop_assert_eq!(got, want);

                for pair in view.windows(2) {
                    if ascending {
                        prop_assert!(pair[0].quantity() <= pair[1].quantity());
                    } else {
                        prop_assert!(pair[0].quantity() >= pair[1].quantity());
                    }
                }
            }

            /// Property: a category filter keeps every match and nothing else.
            #[test]
            fn category_filter_is_exact(rows in row_strategy(), category in "[A-D]") {
                let list = build(&rows);
                let params = ViewParams::new(CategoryFilter::Category(category.clone()), SortDirection::Ascending);
                let view = derive_view(&list, &params);

                prop_assert!(view.iter().all(|i| i.category() == category));
                let expected = list.iter().filter(|i| i.category() == category).count();
                prop_assert_eq!(view.len(), expected);
            }

            /// Property: equal quantities keep their relative input order.
            #[test]
            fn sort_is_stable(rows in row_strategy(), ascending in any::<bool>()) {
                let list = build(&rows);
                let sort = if ascending { SortDirection::Ascending } else { SortDirection::Descending };
                let view = derive_view(&list, &ViewParams::new(CategoryFilter::All, sort));

                for pair in view.windows(2) {
                    if pair[0].quantity() == pair[1].quantity() {
                        prop_assert!(position(&list, &pair[0]) < position(&list, &pair[1]));
                    }
                }
            }
        }
    }
}
