//! Fixed-width bordered tables for query results, plus currency formatting
//! for salary columns. Everything here is pure string manipulation so the
//! display rules stay unit-testable.

use rust_decimal::Decimal;

/// Message rendered when a query produced no rows. A single informational
/// row reads better than an empty table frame.
const NO_ROWS: &str = "no records found";

/// Headers are shown uppercased with underscores replaced by spaces, matching
/// the raw column names the persistence layer uses.
fn prettify_header(raw: &str) -> String {
    raw.to_uppercase().replace('_', " ")
}

/// Horizontal border like `+-----+----+` for the given column widths.
fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// One content row, each cell left-aligned and padded to its column width.
fn content_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        line.push_str(&format!(" {cell:<width$} |"));
    }
    line
}

/// Render rows as a bordered table. An empty `rows` slice collapses to a
/// single informational cell instead of a header with nothing under it.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        let width = NO_ROWS.len();
        let widths = [width];
        let cells = [NO_ROWS.to_string()];
        return format!(
            "{}\n{}\n{}",
            border(&widths),
            content_row(&cells, &widths),
            border(&widths)
        );
    }

    let headers: Vec<String> = headers.iter().map(|raw| prettify_header(raw)).collect();
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() && cell.len() > widths[index] {
                widths[index] = cell.len();
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border(&widths));
    lines.push(content_row(&headers, &widths));
    lines.push(border(&widths));
    for row in rows {
        lines.push(content_row(row, &widths));
    }
    lines.push(border(&widths));
    lines.join("\n")
}

/// Format an amount as US currency: dollar sign, thousands separators, and
/// exactly two decimal places.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{frac_part:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_uppercased_and_despaced() {
        let table = render(
            &["id", "first_name"],
            &[vec!["1".to_string(), "Ada".to_string()]],
        );
        assert!(table.contains("ID"));
        assert!(table.contains("FIRST NAME"));
        assert!(!table.contains("first_name"));
    }

    #[test]
    fn columns_widen_to_fit_the_longest_cell() {
        let table = render(
            &["name"],
            &[
                vec!["Engineering".to_string()],
                vec!["HR".to_string()],
            ],
        );
        assert!(table.contains("| Engineering |"));
        assert!(table.contains("| HR          |"));
        assert!(table.contains("+-------------+"));
    }

    #[test]
    fn empty_result_renders_an_informational_row() {
        let table = render(&["id", "name"], &[]);
        assert_eq!(
            table,
            "+------------------+\n| no records found |\n+------------------+"
        );
    }

    #[test]
    fn currency_gets_separators_and_two_decimals() {
        assert_eq!(format_currency(Decimal::from(120000)), "$120,000.00");
        assert_eq!(format_currency(Decimal::from(999)), "$999.00");
        assert_eq!(format_currency(Decimal::new(123456750, 2)), "$1,234,567.50");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(format_currency(Decimal::new(1005, 1)), "$100.50");
        assert_eq!(format_currency(Decimal::new(1234, 3)), "$1.23");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_symbol() {
        assert_eq!(format_currency(Decimal::from(-50000)), "-$50,000.00");
    }
}
