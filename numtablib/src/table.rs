//! Table building and validation.
//!
//! The first line of the input is the header; every following line is a
//! data row that must hold exactly one number per header column. Lines are
//! consumed in order and the first problem aborts the build, so a `Table`
//! only ever exists in a fully validated state.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::NumtabError;
use crate::parse::{parse_fields, parse_header};
use crate::Result;

/// One line of data values, in header order.
pub type Row = Vec<f64>;

/// A header of column names and the data rows beneath it.
///
/// Invariants: the header is non-empty and every row has exactly one value
/// per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from already-typed parts, enforcing the same invariants
    /// as parsing. Row numbers in errors are 1-based.
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        if header.is_empty() {
            return Err(NumtabError::EmptyHeader);
        }
        for (idx, row) in rows.iter().enumerate() {
            check_row_length(idx + 1, header.len(), row.len())?;
        }
        Ok(Table { header, rows })
    }

    /// Read a table from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => parse_header(&line?),
            None => Vec::new(),
        };
        if header.is_empty() {
            return Err(NumtabError::EmptyHeader);
        }
        debug!(columns = header.len(), "parsed header");

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let row: Row = parse_fields(&line).map_err(|error| NumtabError::Parse {
                line: line_no,
                error,
            })?;
            check_row_length(line_no, header.len(), row.len())?;
            trace!(line = line_no, "parsed row");
            rows.push(row);
        }

        debug!(columns = header.len(), rows = rows.len(), "table complete");
        Ok(Table { header, rows })
    }

    /// Column names, in order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the first column with the given name, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.header.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }
}

impl FromStr for Table {
    type Err = NumtabError;

    fn from_str(s: &str) -> Result<Self> {
        Table::from_reader(s.as_bytes())
    }
}

fn check_row_length(line: usize, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NumtabError::RowLengthMismatch {
            line,
            expected,
            actual,
        })
    }
}

/// Read a table from a file.
///
/// The file handle is dropped as soon as reading stops, on success or error.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|reason| NumtabError::FileRead {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!(path = %path.display(), "reading table");
    Table::from_reader(BufReader::new(file))
}
