//! Read-only sparse matrix access traits

use alloc::vec::Vec;

/// Core sparse matrix trait for storage-agnostic access
///
/// Provides the minimal read interface used by code that only needs to
/// inspect a matrix, independent of how entries are stored.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element;

    /// Get an element at the specified position
    ///
    /// Returns `None` if nothing is stored there (the value is zero).
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column extraction
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored `(col, value)` pairs in a row, in column order
    fn get_row(&self, row_index: i64) -> Vec<(i64, Self::Element)>;

    /// Get all stored `(row, value)` pairs in a column, in row order
    fn get_col(&self, col_index: i64) -> Vec<(i64, Self::Element)>;
}
