//! # spmat - Sparse Integer Matrix Arithmetic
//!
//! File loading, progress logging and the command-line shell around
//! [`spmat_core`].
//!
//! ## Architecture
//!
//! spmat follows a clean core/shell separation:
//!
//! - **spmat-core**: Sparse store, text codec and arithmetic (no I/O)
//! - **spmat**: File I/O, progress observers, cancellation and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{load_pair, write_matrix, LogProgress, MultiplyConfig, Operation, WriteOptions};
//!
//! fn example() -> spmat::Result<()> {
//!     let (a, b) = load_pair("a.txt", "b.txt")?;
//!
//!     let mut progress = LogProgress::new();
//!     let product = Operation::Multiply.apply(&a, &b, &MultiplyConfig::default(), Some(&mut progress))?;
//!
//!     write_matrix("results.txt", &product, WriteOptions::default())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): Memory-mapped input files
//! - **serde** (default): JSON summaries and serde support on core types
//! - **cli** (default): The `spmat` binary
//! - **async**: tokio based reading and writing

// Re-export the core so callers need a single dependency
pub use spmat_core::{
    add, multiply, multiply_with_config, multiply_with_progress, parse, subtract, to_text,
    to_text_sorted, Entry, FormatError, FormatIssue, Matrix, MatrixError, MultiplyConfig,
    MultiplyStrategy, NoProgress, ProgressObserver,
};
pub use spmat_core::ops::DEFAULT_CHUNK_SIZE;

pub mod error;
pub mod file_io;
pub mod operation;
pub mod progress;
pub mod summary;

pub use error::{Error, Result};
pub use file_io::{
    load_pair, read_matrix, render, write_matrix, write_text, WriteOptions, DEFAULT_OUTPUT,
};
#[cfg(feature = "async")]
pub use file_io::{read_matrix_async, write_matrix_async};
pub use operation::Operation;
pub use progress::{CancelFlag, Cancellable, LogProgress};
pub use summary::{preview, MatrixSummary, DEFAULT_PREVIEW_LINES};
