//! Plain-text rendering of the derived view.

use std::fmt::Write as _;

use stockroom_inventory::{CategoryFilter, Item, ViewParams};

pub const EMPTY_VIEW: &str = "No items found. Add some items to get started!";
const LOW_STOCK_MARK: &str = "!";

/// Header line: active filter and sort.
pub fn header(params: &ViewParams) -> String {
    format!(
        "Inventory Management | {} | Sort by Quantity ({})",
        params.category.label(),
        params.sort.label()
    )
}

/// Item table, one row per item in view order. Low-stock rows are marked.
pub fn table(params: &ViewParams, items: &[Item]) -> String {
    let mut out = header(params);
    out.push('\n');

    if items.is_empty() {
        out.push_str(EMPTY_VIEW);
        out.push('\n');
        return out;
    }

    let rows: Vec<[String; 5]> = items
        .iter()
        .map(|item| {
            [
                item.id_typed().short(),
                item.name().to_string(),
                item.category().to_string(),
                item.quantity().to_string(),
                format!("${}", item.price()),
            ]
        })
        .collect();

    let titles = ["ID", "NAME", "CATEGORY", "QUANTITY", "PRICE"];
    let mut widths = titles.map(|t| t.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    push_row(&mut out, " ", &titles.map(String::from), &widths);
    for (item, row) in items.iter().zip(&rows) {
        let mark = if item.is_low_stock() { LOW_STOCK_MARK } else { " " };
        push_row(&mut out, mark, row, &widths);
    }

    let low = items.iter().filter(|i| i.is_low_stock()).count();
    let _ = write!(out, "{} item(s)", items.len());
    if low > 0 {
        let _ = write!(out, ", {low} low stock ({LOW_STOCK_MARK} = Low stock alert!)");
    }
    out.push('\n');
    out
}

fn push_row(out: &mut String, mark: &str, cells: &[String; 5], widths: &[usize; 5]) {
    out.push_str(mark);
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(out, " {cell:<width$} ");
    }
    // Keep lines free of trailing padding.
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

/// Category roster, marking the active selection.
pub fn roster(roster: &[CategoryFilter], active: &CategoryFilter) -> String {
    let mut out = String::new();
    for entry in roster {
        let mark = if entry == active { '*' } else { ' ' };
        let _ = writeln!(out, "{mark} {} ({})", entry.as_str(), entry.label());
    }
    out
}
