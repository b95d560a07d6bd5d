//! Presentation rules shared by the workbook sheets.

use serde_json::Value;

use crate::dataset::Table;

/// Widest a column is ever set, in characters.
pub const MAX_COLUMN_WIDTH: u16 = 50;

/// Characters added to the longest cell in a column.
const COLUMN_PADDING: usize = 2;

/// Turns a field name into a header label.
///
/// Underscores become spaces and each word is title-cased.
///
/// # Example
///
/// ```
/// use salon_data::sink::header_label;
///
/// assert_eq!(header_label("deposit_paid"), "Deposit Paid");
/// assert_eq!(header_label("apt_unit"), "Apt Unit");
/// ```
#[must_use]
pub fn header_label(field: &str) -> String {
    field
        .split('_')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Text a cell displays, used for sizing its column.
///
/// Nulls display as nothing.
#[must_use]
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "TRUE".to_owned(),
        Value::Bool(false) => "FALSE".to_owned(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Column widths for a table: the longest of header and cells plus padding,
/// capped at [`MAX_COLUMN_WIDTH`].
///
/// Empty tables have no columns.
#[must_use]
pub fn column_widths(table: &Table) -> Vec<u16> {
    table
        .columns()
        .into_iter()
        .map(|column| {
            let longest_cell = table
                .records
                .iter()
                .filter_map(|record| record.get(column))
                .map(|value| cell_text(value).chars().count())
                .max()
                .unwrap_or(0);
            let longest = longest_cell.max(header_label(column).chars().count());
            u16::try_from(longest.saturating_add(COLUMN_PADDING))
                .map_or(MAX_COLUMN_WIDTH, |width| width.min(MAX_COLUMN_WIDTH))
        })
        .collect()
}
