//! Observable generators and literal shorthands.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use paramforge_core::{
    fixed, from_fn, ExecutionRecord, FixedGenerator, ParamForgeError, ParamGenerator,
    ParamValue, Result, SharedGenerator, ValueIter,
};

/// A string generator over the given literals.
pub fn strs(values: &[&str]) -> SharedGenerator {
    Arc::new(fixed(values.iter().map(|s| ParamValue::from(*s))))
}

/// An int generator over the given literals.
pub fn ints(values: &[i32]) -> SharedGenerator {
    Arc::new(fixed(values.iter().copied().map(ParamValue::Int)))
}

/// An infinite generator of `Long(0), Long(1), ...`.
pub fn counter() -> SharedGenerator {
    Arc::new(from_fn(true, || (0i64..).map(ParamValue::Long)))
}

/// A generator that remembers every feedback call and counts passes.
#[derive(Debug)]
pub struct RecordingGenerator {
    values: FixedGenerator<ParamValue>,
    infinite: bool,
    passes: AtomicUsize,
    calls: Mutex<Vec<(usize, ParamValue)>>,
}

impl RecordingGenerator {
    /// A finite recording generator.
    pub fn new(values: impl IntoIterator<Item = ParamValue>) -> Self {
        Self {
            values: fixed(values),
            infinite: false,
            passes: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Declares the generator infinite while keeping its finite passes.
    ///
    /// Models a feedback-driven source that cannot be enumerated up front.
    pub fn infinite(mut self) -> Self {
        self.infinite = true;
        self
    }

    /// Feedback received so far, as `(index, value)` pairs in arrival order.
    pub fn calls(&self) -> Vec<(usize, ParamValue)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of passes started.
    pub fn passes(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }
}

impl ParamGenerator<ParamValue> for RecordingGenerator {
    fn values(&self) -> ValueIter<'_, ParamValue> {
        self.passes.fetch_add(1, Ordering::SeqCst);
        self.values.values()
    }

    fn is_infinite(&self) -> bool {
        self.infinite
    }

    fn on_complete(&self, _record: &ExecutionRecord, index: usize, value: &ParamValue) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((index, value.clone()));
    }
}

/// A generator that counts `close` calls and optionally fails them.
#[derive(Debug)]
pub struct ClosingProbe {
    values: FixedGenerator<ParamValue>,
    fail: bool,
    closes: AtomicUsize,
}

impl ClosingProbe {
    pub fn new(values: impl IntoIterator<Item = ParamValue>) -> Self {
        Self {
            values: fixed(values),
            fail: false,
            closes: AtomicUsize::new(0),
        }
    }

    /// A probe whose `close` reports a resource error.
    pub fn failing(values: impl IntoIterator<Item = ParamValue>) -> Self {
        Self {
            fail: true,
            ..Self::new(values)
        }
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl ParamGenerator<ParamValue> for ClosingProbe {
    fn values(&self) -> ValueIter<'_, ParamValue> {
        self.values.values()
    }

    fn is_infinite(&self) -> bool {
        false
    }

    fn close(&self) -> Result<()> {
        let count = self.closes.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(ParamForgeError::Resource(format!("probe close #{count} failed")));
        }
        Ok(())
    }
}
