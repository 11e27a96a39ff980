//! Progress observers for long-running multiplications
//!
//! The core calls observers synchronously from inside its hot loop, so
//! everything here is cheap: a log line, an atomic load.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;
use spmat_core::ProgressObserver;

/// Logs each progress report as a percentage
#[derive(Debug, Default, Clone)]
pub struct LogProgress {
    last: Option<f64>,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent fraction reported, if any
    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, fraction: f64) {
        info!("Multiplication progress: {:.2}%", fraction * 100.0);
        self.last = Some(fraction);
    }
}

/// Shared flag used to request cancellation from another thread
///
/// Clones share the same flag.
#[derive(Debug, Default, Clone)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; observed at the next chunk boundary
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}

/// Wraps an observer so it reports cancellation once `flag` is raised
#[derive(Debug, Clone)]
pub struct Cancellable<P> {
    inner: P,
    flag: CancelFlag,
}

impl<P: ProgressObserver> Cancellable<P> {
    pub fn new(inner: P, flag: CancelFlag) -> Self {
        Self { inner, flag }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: ProgressObserver> ProgressObserver for Cancellable<P> {
    fn on_progress(&mut self, fraction: f64) {
        self.inner.on_progress(fraction);
    }

    fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled() || self.inner.is_cancelled()
    }
}
