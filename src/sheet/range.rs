/// Format the spreadsheet cell range occupied by `count` values in `column`
/// starting at `start_row`, e.g. `cell_range('B', 2, 20)` is `"B2:B21"`.
/// A count of zero is treated as one, giving a single-cell range.
pub fn cell_range(column: char, start_row: u32, count: usize) -> String {
    let column = column.to_ascii_uppercase();
    let end_row = start_row.saturating_add(count.saturating_sub(1) as u32);
    format!("{column}{start_row}:{column}{end_row}")
}
