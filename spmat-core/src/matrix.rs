//! Coordinate-keyed sparse matrix store
//!
//! A [`Matrix`] keeps its dimensions and a map from `(row, col)` to a
//! non-zero value. Absent coordinates read as zero and writing zero removes
//! the coordinate, so the map never holds a zero value. The map remembers
//! insertion order: overwriting keeps a coordinate in place, removing and
//! re-inserting moves it to the end.

use alloc::vec::Vec;
use hashbrown::hash_map::DefaultHashBuilder;
use indexmap::IndexMap;

use crate::validation::validate_dimensions;
use crate::{MatrixOperations, Result, SparseMatrix};

/// Insertion-ordered coordinate map backing a [`Matrix`]
pub(crate) type EntryMap<V = i64> = IndexMap<(i64, i64), V, DefaultHashBuilder>;

/// A single stored `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: i64, col: i64, value: i64) -> Self {
        Self { row, col, value }
    }
}

impl From<(i64, i64, i64)> for Entry {
    fn from((row, col, value): (i64, i64, i64)) -> Self {
        Self { row, col, value }
    }
}

/// Sparse integer matrix storing only non-zero entries
///
/// Coordinates are not range-checked against the dimensions: any `(row, col)`
/// pair may be stored. Equality compares dimensions and logical content, not
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "MatrixRepr", from = "MatrixRepr")
)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    entries: EntryMap,
}

impl Matrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: EntryMap::default(),
        }
    }

    /// Create an empty matrix from signed dimensions
    ///
    /// Fails with [`MatrixError::InvalidDimension`](crate::MatrixError) if
    /// either count is negative.
    pub fn with_dimensions(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = validate_dimensions(rows, cols)?;
        Ok(Self::new(rows, cols))
    }

    /// Create an empty matrix with room for `capacity` entries
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        Self {
            rows,
            cols,
            entries: EntryMap::with_capacity_and_hasher(
                capacity,
                DefaultHashBuilder::default(),
            ),
        }
    }

    /// Build a matrix by applying [`Matrix::set`] to every triple in order
    pub fn from_entries<I, E>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        let mut matrix = Self::new(rows, cols);
        matrix.extend(entries);
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the value at `(row, col)`, or 0 if nothing is stored there
    pub fn get(&self, row: i64, col: i64) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Store `value` at `(row, col)`; a zero value removes the coordinate
    pub fn set(&mut self, row: i64, col: i64, value: i64) {
        if value == 0 {
            self.entries.shift_remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: i64, col: i64) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries divided by `rows * cols`
    ///
    /// Out-of-range entries are counted too, so the value can exceed 1.0.
    /// Returns 0.0 for a matrix with no cells.
    pub fn density(&self) -> f64 {
        let cells = self.rows as f64 * self.cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }

    /// Iterate over stored entries in insertion order
    ///
    /// The order depends on the sequence of writes, not on the content; use [`Matrix::sorted_entries`] when a
    /// stable order is needed.
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// All stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable_by_key(|e| (e.row, e.col));
        entries
    }

    pub(crate) fn raw_entries(&self) -> &EntryMap {
        &self.entries
    }

    pub(crate) fn raw_entries_mut(&mut self) -> &mut EntryMap {
        &mut self.entries
    }
}

impl<E: Into<Entry>> Extend<E> for Matrix {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            let Entry { row, col, value } = entry.into();
            self.set(row, col, value);
        }
    }
}

impl SparseMatrix for Matrix {
    type Element = i64;

    fn get_element(&self, row: usize, col: usize) -> Option<i64> {
        let row = i64::try_from(row).ok()?;
        let col = i64::try_from(col).ok()?;
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl MatrixOperations for Matrix {
    fn get_row(&self, row_index: i64) -> Vec<(i64, i64)> {
        let mut row: Vec<(i64, i64)> = self
            .entries
            .iter()
            .filter(|(&(r, _), _)| r == row_index)
            .map(|(&(_, c), &v)| (c, v))
            .collect();
        row.sort_unstable_by_key(|&(c, _)| c);
        row
    }

    fn get_col(&self, col_index: i64) -> Vec<(i64, i64)> {
        let mut col: Vec<(i64, i64)> = self
            .entries
            .iter()
            .filter(|(&(_, c), _)| c == col_index)
            .map(|(&(r, _), &v)| (r, v))
            .collect();
        col.sort_unstable_by_key(|&(r, _)| r);
        col
    }
}

/// Serde shape of a matrix: dimensions plus a flat entry list
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    #[serde(default)]
    entries: Vec<Entry>,
}

#[cfg(feature = "serde")]
impl From<Matrix> for MatrixRepr {
    fn from(matrix: Matrix) -> Self {
        let entries = matrix.sorted_entries();
        Self {
            rows: matrix.rows,
            cols: matrix.cols,
            entries,
        }
    }
}

#[cfg(feature = "serde")]
impl From<MatrixRepr> for Matrix {
    fn from(repr: MatrixRepr) -> Self {
        Matrix::from_entries(repr.rows, repr.cols, repr.entries)
    }
}
