//! Fixed-width rendering of a validated [`Table`].
//!
//! Layout:
//! - the header line pads each name on the left to at least `min_width`
//! - each data row starts with a newline and pads each value to at least
//!   `max(width of its column name, min_width)`
//! - every field is followed by a single space, and the output does not end
//!   with a newline
//!
//! Widths count characters, not bytes.

use std::fmt;
use std::io::{self, Write};

use crate::table::Table;

/// Minimum field width used when none is configured.
pub const DEFAULT_MIN_WIDTH: usize = 12;

/// How numbers are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest text that parses back to the same value (`2`, `3.14`, `NaN`, `inf`).
    #[default]
    Shortest,
    /// Fixed number of digits after the decimal point (`Fixed(6)` gives `3.140000`).
    Fixed(usize),
}

impl NumberFormat {
    /// Render a single value.
    pub fn render(self, value: f64) -> String {
        match self {
            NumberFormat::Shortest => value.to_string(),
            NumberFormat::Fixed(precision) => format!("{value:.precision$}"),
        }
    }
}

/// Renders tables as right-aligned columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormatter {
    pub min_width: usize,
    pub number_format: NumberFormat,
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            number_format: NumberFormat::default(),
        }
    }
}

impl TableFormatter {
    /// Formatter with the default minimum width and shortest number format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum field width.
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Set the number format.
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Width of each column in data rows.
    pub fn column_widths(&self, table: &Table) -> Vec<usize> {
        table
            .header()
            .iter()
            .map(|name| name.chars().count().max(self.min_width))
            .collect()
    }

    /// Write the table to `out`.
    pub fn write_to<W: Write>(&self, table: &Table, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.display(table))
    }

    /// Render the table to a string.
    pub fn render(&self, table: &Table) -> String {
        self.display(table).to_string()
    }

    /// A [`fmt::Display`] view of the table using this formatter.
    pub fn display<'a>(&self, table: &'a Table) -> Formatted<'a> {
        Formatted {
            table,
            formatter: *self,
        }
    }
}

/// A table paired with the formatter that renders it.
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    table: &'a Table,
    formatter: TableFormatter,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min_width = self.formatter.min_width;
        for name in self.table.header() {
            write!(f, "{name:>min_width$} ")?;
        }

        let widths = self.formatter.column_widths(self.table);
        for row in self.table.rows() {
            writeln!(f)?;
            for (value, width) in row.iter().zip(&widths) {
                let text = self.formatter.number_format.render(*value);
                write!(f, "{text:>width$} ", width = *width)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> Table {
        text.parse().unwrap()
    }

    #[test]
    fn test_header_only_layout() {
        let out = TableFormatter::new().render(&table("x y"));
        assert_eq!(out, format!("{:>12} {:>12} ", "x", "y"));
    }

    #[test]
    fn test_alpha_b_layout() {
        let t = table("alpha b\n3.14 2.0");

        let out = TableFormatter::new().render(&t);

        let expected = format!(
            "{:>12} {:>12} \n{:>12} {:>12} ",
            "alpha", "b", "3.14", "2"
        );
        assert_eq!(out, expected);
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_long_header_widens_column() {
        let t = table("a_very_long_column_name short\n1 2");
        let out = TableFormatter::new().render(&t);
        let lines: Vec<&str> = out.split('\n').collect();

        assert_eq!(lines[0], "a_very_long_column_name        short ");
        assert_eq!(lines[1], "                      1            2 ");
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_min_width_override() {
        let out = TableFormatter::new().min_width(3).render(&table("a,b\n1,22"));
        assert_eq!(out, "  a   b \n  1  22 ");
    }

    #[test]
    fn test_zero_min_width() {
        let out = TableFormatter::new().min_width(0).render(&table("a b\n10 2"));
        assert_eq!(out, "a b \n10 2 ");
    }

    #[test]
    fn test_fixed_number_format() {
        let out = TableFormatter::new()
            .min_width(10)
            .number_format(NumberFormat::Fixed(6))
            .render(&table("v\n3.14"));
        assert_eq!(out, "         v \n  3.140000 ");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(NumberFormat::Shortest.render(f64::NAN), "NaN");
        assert_eq!(NumberFormat::Shortest.render(f64::INFINITY), "inf");
        assert_eq!(NumberFormat::Shortest.render(f64::NEG_INFINITY), "-inf");
        assert_eq!(NumberFormat::Shortest.render(-0.5), "-0.5");
        assert_eq!(NumberFormat::Shortest.render(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_one_line_per_row() {
        let out = TableFormatter::new().render(&table("a b c\n1 2 3\n4 5 6\n7 8 9"));
        let lines: Vec<&str> = out.split('\n').collect();

        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.split_whitespace().count(), 3);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let t = table("alpha beta\n1.5 -2\n3 4");
        let formatter = TableFormatter::new();

        let first = formatter.render(&t);
        let second = formatter.render(&t);
        assert_eq!(first, second);

        let mut buf = Vec::new();
        formatter.write_to(&t, &mut buf).unwrap();
        assert_eq!(buf, first.into_bytes());
    }

    #[test]
    fn test_width_counts_chars() {
        let out = TableFormatter::new().min_width(4).render(&table("é\n1"));
        assert_eq!(out, "   é \n   1 ");
    }
}
