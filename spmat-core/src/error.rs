//! Error types for sparse matrix operations

/// Why a line of matrix text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FormatIssue {
    /// The `rows=` or `cols=` line is absent
    MissingHeader,
    /// The header line does not start with the expected prefix
    MalformedHeader,
    /// An entry line is not wrapped in parentheses
    MalformedEntry,
    /// An entry line does not hold exactly three fields
    FieldCount,
    /// A header value or entry field is not a base-10 integer
    InvalidInteger,
}

/// Location and cause of a text format failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormatError {
    /// 1-based line number of the offending line
    pub line: usize,
    /// What was wrong with it
    pub issue: FormatIssue,
}

impl FormatError {
    pub const fn new(line: usize, issue: FormatIssue) -> Self {
        Self { line, issue }
    }
}

/// Errors that can occur during matrix construction, parsing and arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MatrixError {
    /// Negative row or column count
    InvalidDimension,
    /// Malformed header or entry line in matrix text
    Format(FormatError),
    /// Operand shapes differ for addition or subtraction
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Inner dimensions differ for multiplication
    DimensionIncompatible { left_cols: usize, right_rows: usize },
    /// An accumulated value does not fit in an i64
    Overflow,
    /// Multiplication was cancelled by its progress observer
    Cancelled,
}

impl From<FormatError> for MatrixError {
    fn from(err: FormatError) -> Self {
        MatrixError::Format(err)
    }
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatIssue::MissingHeader => "missing header line",
            FormatIssue::MalformedHeader => "malformed header line",
            FormatIssue::MalformedEntry => "entry is not of the form (row, col, value)",
            FormatIssue::FieldCount => "entry does not have exactly three fields",
            FormatIssue::InvalidInteger => "invalid integer",
        };
        write!(f, "{msg}")
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line {}: {}", self.line, self.issue)
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimension => write!(f, "Matrix dimensions must be non-negative"),
            MatrixError::Format(err) => write!(f, "Invalid matrix format ({err})"),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "Matrix dimensions do not match: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::DimensionIncompatible {
                left_cols,
                right_rows,
            } => write!(
                f,
                "Matrix dimensions are not compatible for multiplication: \
                 {left_cols} columns vs {right_rows} rows"
            ),
            MatrixError::Overflow => write!(f, "Integer overflow in matrix arithmetic"),
            MatrixError::Cancelled => write!(f, "Operation cancelled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
