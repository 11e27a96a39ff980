//! Literal tokens of the matrix text format

/// Prefix of the first header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the second header line
pub const COLS_PREFIX: &str = "cols=";

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry fields when writing
pub const FIELD_SEPARATOR: &str = ", ";
