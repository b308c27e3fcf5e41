//! Close-once guard for providers.

use std::sync::atomic::{AtomicBool, Ordering};

use paramforge_core::{ExecutionRecord, Result, SharedGenerator};
use tracing::warn;

use crate::provider::{ParamProvider, ParamStream};

/// Closes the wrapped provider exactly once: on the first explicit
/// [`close`](ParamProvider::close), or when dropped.
///
/// A failure while closing on drop is logged, since it cannot be returned.
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, ParamGeneratorExt};
/// use paramforge_explorer::{EvenAllParamChange, ParamProvider, ScopedProvider};
///
/// let provider = ScopedProvider::new(EvenAllParamChange::new(vec![
///     fixed(vec![1, 2]).into_param().shared(),
/// ]));
/// let first = provider.stream().next();
/// assert!(first.is_some());
/// // generators are closed here, even though the stream was abandoned
/// ```
#[derive(Debug)]
pub struct ScopedProvider<P: ParamProvider> {
    provider: P,
    closed: AtomicBool,
}

impl<P: ParamProvider> ScopedProvider<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            closed: AtomicBool::new(false),
        }
    }

    /// Returns the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.provider
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl<P: ParamProvider> ParamProvider for ScopedProvider<P> {
    fn generators(&self) -> &[SharedGenerator] {
        self.provider.generators()
    }

    fn name(&self) -> &'static str {
        self.provider.name()
    }

    fn arity(&self) -> usize {
        self.provider.arity()
    }

    fn stream(&self) -> ParamStream<'_> {
        self.provider.stream()
    }

    fn route_result(&self, record: &ExecutionRecord) {
        self.provider.route_result(record)
    }

    /// Closes the provider; later calls return `Ok(())` without closing again.
    fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.provider.close()
    }
}

impl<P: ParamProvider> Drop for ScopedProvider<P> {
    fn drop(&mut self) {
        if *self.closed.get_mut() {
            return;
        }
        *self.closed.get_mut() = true;
        if let Err(err) = self.provider.close() {
            warn!(
                event = "close_failed",
                provider = self.provider.name(),
                error = %err,
                "provider close failed on drop"
            );
        }
    }
}
