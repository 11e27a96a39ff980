//! Element-wise addition and subtraction

use crate::validation::validate_same_shape;
use crate::{Matrix, MatrixError, Result};

/// Sum of two matrices of equal shape
///
/// Runs in O(nnz(a) + nnz(b)). Fails with
/// [`MatrixError::DimensionMismatch`] if the shapes differ.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    combine(a, b, i64::checked_add)
}

/// Difference `a - b` of two matrices of equal shape
///
/// Runs in O(nnz(a) + nnz(b)). Fails with
/// [`MatrixError::DimensionMismatch`] if the shapes differ.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    combine(a, b, i64::checked_sub)
}

/// Merge two stores with `op(a_value, b_value)`, treating absent cells as 0
fn combine(a: &Matrix, b: &Matrix, op: fn(i64, i64) -> Option<i64>) -> Result<Matrix> {
    validate_same_shape(a.dimensions(), b.dimensions())?;

    let mut result = Matrix::with_capacity(a.rows(), a.cols(), a.nnz().max(b.nnz()));
    let out = result.raw_entries_mut();

    for (&(row, col), &value) in a.raw_entries() {
        let combined = op(value, b.get(row, col)).ok_or(MatrixError::Overflow)?;
        if combined != 0 {
            out.insert((row, col), combined);
        }
    }

    // Coordinates only present in b; op(0, v) is non-zero for non-zero v
    for (&key, &value) in b.raw_entries() {
        if !a.raw_entries().contains_key(&key) {
            out.insert(key, op(0, value).ok_or(MatrixError::Overflow)?);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample_a() -> Matrix {
        Matrix::from_entries(2, 2, [(0, 0, 1), (0, 1, 2), (1, 1, 3)])
    }

    fn sample_b() -> Matrix {
        Matrix::from_entries(2, 2, [(0, 0, 4), (1, 0, 5)])
    }

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> Matrix {
        let mut m = Matrix::new(rows, cols);
        for _ in 0..nnz {
            let r = rng.gen_range(0..rows as i64);
            let c = rng.gen_range(0..cols as i64);
            m.set(r, c, rng.gen_range(-5..=5));
        }
        m
    }

    #[test]
    fn test_add_scenario() {
        let sum = add(&sample_a(), &sample_b()).unwrap();
        assert_eq!(
            sum,
            Matrix::from_entries(2, 2, [(0, 0, 5), (0, 1, 2), (1, 0, 5), (1, 1, 3)])
        );
    }

    #[test]
    fn test_subtract_scenario() {
        let diff = subtract(&sample_a(), &sample_b()).unwrap();
        assert_eq!(
            diff,
            Matrix::from_entries(2, 2, [(0, 0, -3), (0, 1, 2), (1, 0, -5), (1, 1, 3)])
        );
    }

    #[test]
    fn test_result_lists_left_entries_then_right_only() {
        let a = Matrix::from_entries(3, 3, [(2, 2, 1), (0, 1, 2), (1, 0, 3)]);
        let b = Matrix::from_entries(3, 3, [(1, 1, 5), (0, 1, 1), (2, 0, 6), (1, 0, -3)]);
        let order = |m: &Matrix| m.iter().map(|e| (e.row, e.col, e.value)).collect::<Vec<_>>();

        // (1, 0) cancels in the sum and is dropped from its slot
        assert_eq!(
            order(&add(&a, &b).unwrap()),
            [(2, 2, 1), (0, 1, 3), (1, 1, 5), (2, 0, 6)]
        );
        assert_eq!(
            order(&subtract(&a, &b).unwrap()),
            [(2, 2, 1), (0, 1, 1), (1, 0, 6), (1, 1, -5), (2, 0, -6)]
        );
    }

    #[test]
    fn test_add_cancellation_removes_entry() {
        let a = Matrix::from_entries(3, 3, [(1, 1, 4), (2, 2, 1)]);
        let b = Matrix::from_entries(3, 3, [(1, 1, -4)]);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.nnz(), 1);
        assert!(!sum.contains(1, 1));
        assert_eq!(sum.get(2, 2), 1);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(3, 2);
        let expected = MatrixError::DimensionMismatch {
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(add(&a, &b), Err(expected));
        assert_eq!(subtract(&a, &b), Err(expected));
    }

    #[test]
    fn test_operands_unchanged() {
        let a = sample_a();
        let b = sample_b();
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = add(&a, &b).unwrap();
        let _ = subtract(&a, &b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_overflow() {
        let a = Matrix::from_entries(1, 1, [(0, 0, i64::MAX)]);
        let b = Matrix::from_entries(1, 1, [(0, 0, 1)]);
        assert_eq!(add(&a, &b), Err(MatrixError::Overflow));

        let empty = Matrix::new(1, 1);
        let min = Matrix::from_entries(1, 1, [(0, 0, i64::MIN)]);
        assert_eq!(subtract(&empty, &min), Err(MatrixError::Overflow));
    }

    #[test]
    fn test_algebraic_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let a = random_matrix(&mut rng, 12, 9, 40);
            let b = random_matrix(&mut rng, 12, 9, 40);

            // Commutative
            assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());

            // Complete cancellation
            assert!(subtract(&a, &a).unwrap().is_empty());

            // Additive identity
            let round = add(&subtract(&a, &b).unwrap(), &b).unwrap();
            assert_eq!(round, a);

            // Zero invariant
            let sum = add(&a, &b).unwrap();
            assert!(sum.iter().all(|e| e.value != 0));
            for r in 0..12 {
                for c in 0..9 {
                    assert_eq!(sum.get(r, c), a.get(r, c) + b.get(r, c));
                }
            }
        }
    }
}
