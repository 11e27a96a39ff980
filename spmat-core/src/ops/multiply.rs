//! Sparse matrix product with progress reporting
//!
//! Work is measured in examined entry pairs: a product of `a` and `b`
//! examines `nnz(a) * nnz(b)` pairs whichever strategy is used. Each time
//! that counter crosses a multiple of the configured chunk size the
//! observer is polled for cancellation and then told the completed
//! fraction.
//!
//! Partial sums are kept exact, so whether a product overflows depends only
//! on the final value of each cell, never on the order entries are visited.

use alloc::vec::Vec;
use hashbrown::HashMap;
use indexmap::map::Entry as Slot;

use super::config::{MultiplyConfig, MultiplyStrategy};
use crate::validation::validate_inner_dimensions;
use crate::matrix::EntryMap;
use crate::{Matrix, MatrixError, ProgressObserver, Result};

/// Product `a * b` with the default configuration and no observer
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_with_config(a, b, &MultiplyConfig::default(), None)
}

/// Product `a * b` reporting progress to `observer`
pub fn multiply_with_progress<P: ProgressObserver>(
    a: &Matrix,
    b: &Matrix,
    observer: &mut P,
) -> Result<Matrix> {
    multiply_with_config(a, b, &MultiplyConfig::default(), Some(observer))
}

/// Product `a * b` with explicit configuration
///
/// The result has shape `(a.rows(), b.cols())`. Fails with
/// [`MatrixError::DimensionIncompatible`] if `a.cols() != b.rows()`,
/// [`MatrixError::Overflow`] if an accumulated value leaves the i64 range
/// and [`MatrixError::Cancelled`] if the observer asks to stop.
pub fn multiply_with_config(
    a: &Matrix,
    b: &Matrix,
    config: &MultiplyConfig,
    observer: Option<&mut dyn ProgressObserver>,
) -> Result<Matrix> {
    validate_inner_dimensions(a.dimensions(), b.dimensions())?;

    let mut tracker = Tracker::new(a.nnz(), b.nnz(), config.chunk_size(), observer);
    tracker.check_cancelled()?;

    let mut sums: EntryMap<WideSum> = EntryMap::default();

    match config.strategy {
        MultiplyStrategy::Naive => {
            for (&(i, k), &va) in a.raw_entries() {
                for (&(k2, j), &vb) in b.raw_entries() {
                    if k2 == k {
                        accumulate(&mut sums, (i, j), va, vb);
                    }
                    tracker.advance(1)?;
                }
            }
        }
        MultiplyStrategy::RowIndexed => {
            let index = RowIndex::build(b);
            let per_entry = b.nnz() as u128;
            for (&(i, k), &va) in a.raw_entries() {
                for &(j, vb) in index.row(k) {
                    accumulate(&mut sums, (i, j), va, vb);
                }
                tracker.advance(per_entry)?;
            }
        }
    }

    let mut result = Matrix::with_capacity(a.rows(), b.cols(), sums.len());
    let out = result.raw_entries_mut();
    for (key, sum) in sums {
        out.insert(key, sum.to_i64().ok_or(MatrixError::Overflow)?);
    }

    tracker.finish();
    Ok(result)
}

/// Add `va * vb` into `sums[key]`, removing the key if the sum cancels
fn accumulate(sums: &mut EntryMap<WideSum>, key: (i64, i64), va: i64, vb: i64) {
    // An i64 product always fits in an i128
    let product = i128::from(va) * i128::from(vb);
    match sums.entry(key) {
        Slot::Occupied(mut slot) => {
            slot.get_mut().add(product);
            if slot.get().is_zero() {
                slot.shift_remove();
            }
        }
        // Both factors are non-zero
        Slot::Vacant(slot) => {
            slot.insert(WideSum::new(product));
        }
    }
}

/// Exact running sum, `carries * 2^128 + low`
///
/// A handful of `i64::MIN * i64::MIN` terms already leave the i128 range,
/// so wrap-arounds are counted instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WideSum {
    low: i128,
    carries: i64,
}

impl WideSum {
    fn new(value: i128) -> Self {
        Self {
            low: value,
            carries: 0,
        }
    }

    fn add(&mut self, value: i128) {
        let (low, wrapped) = self.low.overflowing_add(value);
        if wrapped {
            // Wrap-around is always in the direction of the addend
            self.carries += if value > 0 { 1 } else { -1 };
        }
        self.low = low;
    }

    fn is_zero(&self) -> bool {
        self.carries == 0 && self.low == 0
    }

    fn to_i64(self) -> Option<i64> {
        if self.carries != 0 {
            return None;
        }
        i64::try_from(self.low).ok()
    }
}

/// Right operand entries grouped by row: row -> [(col, value)]
struct RowIndex {
    rows: HashMap<i64, Vec<(i64, i64)>>,
}

impl RowIndex {
    fn build(matrix: &Matrix) -> Self {
        let mut rows: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();
        for (&(row, col), &value) in matrix.raw_entries() {
            rows.entry(row).or_default().push((col, value));
        }
        Self { rows }
    }

    fn row(&self, row: i64) -> &[(i64, i64)] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Counts examined pairs and drives the observer at chunk boundaries
struct Tracker<'a> {
    examined: u128,
    total: u128,
    chunk_size: u128,
    last_reported: Option<f64>,
    observer: Option<&'a mut dyn ProgressObserver>,
}

impl<'a> Tracker<'a> {
    fn new(
        nnz_a: usize,
        nnz_b: usize,
        chunk_size: u64,
        observer: Option<&'a mut dyn ProgressObserver>,
    ) -> Self {
        Self {
            examined: 0,
            total: nnz_a as u128 * nnz_b as u128,
            chunk_size: u128::from(chunk_size.max(1)),
            last_reported: None,
            observer,
        }
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.observer {
            Some(observer) if observer.is_cancelled() => Err(MatrixError::Cancelled),
            _ => Ok(()),
        }
    }

    fn advance(&mut self, pairs: u128) -> Result<()> {
        if self.observer.is_none() {
            return Ok(());
        }
        let before = self.examined / self.chunk_size;
        self.examined += pairs;
        if self.examined / self.chunk_size > before {
            self.check_cancelled()?;
            self.report(self.examined as f64 / self.total as f64);
        }
        Ok(())
    }

    fn finish(&mut self) {
        if matches!(self.last_reported, Some(last) if last < 1.0) {
            self.report(1.0);
        }
    }

    fn report(&mut self, fraction: f64) {
        let fraction = fraction.min(1.0);
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_progress(fraction);
        }
        self.last_reported = Some(fraction);
    }
}
