//! Arithmetic on sparse matrices
//!
//! Every operation borrows its operands and returns a freshly allocated
//! [`Matrix`](crate::Matrix). Failures never leave a partial result behind.

pub mod config;
pub mod elementwise;
pub mod multiply;

pub use config::{MultiplyConfig, MultiplyStrategy, DEFAULT_CHUNK_SIZE};
pub use elementwise::{add, subtract};
pub use multiply::{multiply, multiply_with_config, multiply_with_progress};
