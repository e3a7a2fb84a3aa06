//! Splitting a CSV data line into cells.

/// Splits `line` on commas that sit outside double-quoted sections.
///
/// A comma is a separator when the number of `"` characters after it, up to
/// the end of the line, is even. Each cell has one surrounding quote stripped
/// from either end and is then trimmed. Escaped quotes (`""`) are left as-is.
#[must_use]
pub fn split_row(line: &str) -> Vec<String> {
    let total_quotes = line.matches('"').count();
    let mut seen_quotes = 0usize;
    let mut cells = Vec::new();
    let mut start = 0usize;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => seen_quotes += 1,
            ',' if (total_quotes - seen_quotes) % 2 == 0 => {
                cells.push(clean_cell(&line[start..idx]).trim().to_owned());
                start = idx + 1;
            }
            _ => {}
        }
    }
    cells.push(clean_cell(&line[start..]).trim().to_owned());
    cells
}

/// Removes at most one leading and one trailing `"`.
pub(crate) fn clean_cell(cell: &str) -> &str {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}
