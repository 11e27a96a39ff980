//! Human-readable summaries of matrices

use std::fmt;

use spmat_core::Matrix;

/// Number of result lines shown by the shell after an operation
pub const DEFAULT_PREVIEW_LINES: usize = 12;

/// Shape and fill statistics of a matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    /// Stored entries divided by rows * cols
    pub density: f64,
}

impl MatrixSummary {
    pub fn of(matrix: &Matrix) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            nnz: matrix.nnz(),
            density: matrix.density(),
        }
    }
}

impl fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimensions: {} x {}", self.rows, self.cols)?;
        writeln!(f, "Non-zeros: {}", self.nnz)?;
        write!(f, "Density: {:.6}%", self.density * 100.0)
    }
}

/// The first `lines` lines of `text`
pub fn preview(text: &str, lines: usize) -> String {
    text.lines().take(lines).collect::<Vec<_>>().join("\n")
}
