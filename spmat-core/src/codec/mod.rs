//! Line-oriented text encoding of sparse matrices
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ```
//!
//! Entry lines may appear in any order, blank lines are ignored and
//! whitespace around fields is insignificant.

pub mod constants;
pub mod text;

pub use text::{parse, to_text, to_text_sorted, write_text, EntryOrder};
