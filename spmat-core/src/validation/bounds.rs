//! Dimension validation for matrix construction and arithmetic

use crate::MatrixError;

/// Validate signed row/column counts and convert them to `usize`
///
/// Negative counts are rejected. Counts that do not fit in `usize` on the
/// current target are rejected as well.
pub fn validate_dimensions(rows: i64, cols: i64) -> Result<(usize, usize), MatrixError> {
    let rows = usize::try_from(rows).map_err(|_| MatrixError::InvalidDimension)?;
    let cols = usize::try_from(cols).map_err(|_| MatrixError::InvalidDimension)?;
    Ok((rows, cols))
}

/// Check that two shapes are identical (element-wise operations)
pub const fn validate_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatrixError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Check that `left.cols == right.rows` (matrix product)
pub const fn validate_inner_dimensions(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionIncompatible {
            left_cols: left.1,
            right_rows: right.0,
        });
    }
    Ok(())
}
