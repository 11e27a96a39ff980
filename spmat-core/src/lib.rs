#![no_std]

//! spmat-core - Sparse Integer Matrix Store, Codec and Arithmetic
//!
//! This crate holds the storage-independent part of spmat: the sparse
//! matrix container, its line-oriented text encoding and the add, subtract
//! and multiply operations. It performs no I/O.
//!
//! ```
//! use spmat_core::{add, multiply, Matrix};
//!
//! let a: Matrix = "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 1, 3)".parse().unwrap();
//! let b = Matrix::from_entries(2, 2, [(0, 0, 4), (1, 0, 5)]);
//!
//! assert_eq!(add(&a, &b).unwrap().get(1, 0), 5);
//! assert_eq!(multiply(&a, &b).unwrap().get(0, 0), 14);
//! ```

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod codec;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use codec::{parse, to_text, to_text_sorted, EntryOrder};
pub use error::*;
pub use matrix::{Entry, Matrix};
pub use ops::{
    add, multiply, multiply_with_config, multiply_with_progress, subtract, MultiplyConfig,
    MultiplyStrategy,
};
pub use traits::{MatrixOperations, NoProgress, ProgressObserver, SparseMatrix};
