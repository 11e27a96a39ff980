//! Text parsing and serialization

use alloc::string::String;
use core::fmt::{self, Write};
use core::str::FromStr;

use super::constants::{COLS_PREFIX, ENTRY_CLOSE, ENTRY_OPEN, FIELD_SEPARATOR, ROWS_PREFIX};
use crate::validation::{parse_entry, parse_header};
use crate::{Entry, FormatError, FormatIssue, Matrix, MatrixError, Result};

/// Order in which entry lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// The order entries were first stored in
    #[default]
    Insertion,
    /// Row-major order, stable across runs
    Sorted,
}

/// Parse matrix text into a [`Matrix`]
///
/// Entries are applied through [`Matrix::set`], so a repeated coordinate
/// overwrites the earlier value and a zero value deletes it.
pub fn parse(text: &str) -> Result<Matrix> {
    let mut lines = text.split('\n');

    let rows = header_value(lines.next(), 1, ROWS_PREFIX)?;
    let cols = header_value(lines.next(), 2, COLS_PREFIX)?;
    let mut matrix = Matrix::with_dimensions(rows, cols)?;

    for (index, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Header lines are 1 and 2
        let (row, col, value) =
            parse_entry(line).map_err(|issue| FormatError::new(index + 3, issue))?;
        matrix.set(row, col, value);
    }

    Ok(matrix)
}

fn header_value(line: Option<&str>, number: usize, prefix: &str) -> Result<i64> {
    let line = line.ok_or(FormatError::new(number, FormatIssue::MissingHeader))?;
    parse_header(line, prefix).map_err(|issue| MatrixError::from(FormatError::new(number, issue)))
}

/// Write matrix text to any [`fmt::Write`] sink
///
/// No newline follows the last line.
pub fn write_text<W: Write>(matrix: &Matrix, out: &mut W, order: EntryOrder) -> fmt::Result {
    write!(out, "{ROWS_PREFIX}{}\n{COLS_PREFIX}{}", matrix.rows(), matrix.cols())?;
    match order {
        EntryOrder::Insertion => {
            for entry in matrix.iter() {
                write_entry(out, entry)?;
            }
        }
        EntryOrder::Sorted => {
            for entry in matrix.sorted_entries() {
                write_entry(out, entry)?;
            }
        }
    }
    Ok(())
}

fn write_entry<W: Write>(out: &mut W, entry: Entry) -> fmt::Result {
    write!(
        out,
        "\n{ENTRY_OPEN}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{ENTRY_CLOSE}",
        entry.row, entry.col, entry.value
    )
}

/// Serialize a matrix, entries in insertion order
pub fn to_text(matrix: &Matrix) -> String {
    render(matrix, EntryOrder::Insertion)
}

/// Serialize a matrix, entries in row-major order
pub fn to_text_sorted(matrix: &Matrix) -> String {
    render(matrix, EntryOrder::Sorted)
}

fn render(matrix: &Matrix, order: EntryOrder) -> String {
    // Header plus roughly 16 bytes per entry line
    let mut out = String::with_capacity(32 + matrix.nnz() * 16);
    write_text(matrix, &mut out, order).expect("writing to a String cannot fail");
    out
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(self, f, EntryOrder::Insertion)
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
