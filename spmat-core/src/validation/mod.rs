//! Validation utilities for matrix text and operand shapes
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_dimensions, validate_inner_dimensions, validate_same_shape};
pub use parsing::{parse_entry, parse_header, parse_integer};
