//! # numtablib
//!
//! Read a whitespace-tolerant numeric text table and print it as
//! right-aligned fixed-width columns.
//!
//! ## Overview
//!
//! The input is plain text. The first line holds column names, every other
//! line holds one number per column. Space, comma and newline all separate
//! tokens and runs of them collapse, so these lines are equivalent:
//!
//! ```text
//! a, b , c
//! a b c
//! ```
//!
//! The pipeline has three stages, each in its own module:
//!
//! - **parse**: split a line into tokens and convert them ([`parse_fields`])
//! - **table**: assemble and validate a [`Table`], failing fast with the line
//!   and column of the first problem ([`read_table`], [`Table::from_reader`])
//! - **format**: render the table ([`TableFormatter`])
//!
//! ## Example
//!
//! ```rust
//! use numtablib::{Table, TableFormatter};
//!
//! let table: Table = "alpha,b\n3.14,2".parse().unwrap();
//! assert_eq!(table.header(), &["alpha", "b"]);
//!
//! let text = TableFormatter::new().min_width(6).render(&table);
//! assert_eq!(text, " alpha      b \n  3.14      2 ");
//!
//! let err = "x y\n1 abc".parse::<Table>().unwrap_err();
//! assert!(err.to_string().starts_with("error parsing line 1: column 2:"));
//! ```

pub mod error;
pub mod format;
pub mod parse;
pub mod table;

pub use error::{NumtabError, ParseError, ParseErrorKind};
pub use format::{Formatted, NumberFormat, TableFormatter, DEFAULT_MIN_WIDTH};
pub use parse::{parse_fields, parse_header, tokens, Field, SEPARATORS};
pub use table::{read_table, Row, Table};

/// Result type for numtablib operations
pub type Result<T> = std::result::Result<T, NumtabError>;
