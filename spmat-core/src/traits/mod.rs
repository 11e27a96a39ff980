//! Abstract interfaces for sparse matrices and long-running operations
//!
//! These are pure interfaces. [`Matrix`](crate::Matrix) implements the
//! matrix traits; observers are supplied by callers.

pub mod matrix;
pub mod progress;

pub use matrix::{MatrixOperations, SparseMatrix};
pub use progress::{NoProgress, ProgressObserver};
