//! Progress reporting for long-running matrix operations

/// Observer invoked synchronously from inside a long-running operation
///
/// Observers run inline with the hot loop: they must return promptly and
/// must not touch the operands of the operation they observe.
pub trait ProgressObserver {
    /// Called with the completed fraction of work, in `[0, 1]`
    ///
    /// Successive calls for one operation never decrease.
    fn on_progress(&mut self, fraction: f64);

    /// Polled at chunk boundaries; returning `true` aborts the operation
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(f64)> ProgressObserver for F {
    fn on_progress(&mut self, fraction: f64) {
        self(fraction)
    }
}

/// Observer that ignores every report
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _fraction: f64) {}
}
