//! Live position inside one generator's current pass.

use paramforge_core::{ParamGenerator, ParamValue, ValueIter};

/// Outcome of [`Cursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    /// The next value of the current pass.
    Next,
    /// The pass was exhausted and a fresh one supplied the value.
    Wrapped,
    /// The generator produced nothing, even after a restart.
    Empty,
}

/// Drives passes of a single generator and remembers the last value taken.
pub(crate) struct Cursor<'a> {
    generator: &'a dyn ParamGenerator<ParamValue>,
    pass: Option<ValueIter<'a, ParamValue>>,
    value: ParamValue,
    taken: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(generator: &'a dyn ParamGenerator<ParamValue>) -> Self {
        Self {
            generator,
            pass: None,
            value: ParamValue::Null,
            taken: 0,
        }
    }

    /// Takes the next value of the current pass without restarting.
    ///
    /// Returns false once the pass is exhausted (or was never started).
    pub(crate) fn step(&mut self) -> bool {
        let Some(pass) = self.pass.as_mut() else {
            return false;
        };
        match pass.next() {
            Some(value) => {
                self.value = value;
                self.taken += 1;
                true
            }
            None => false,
        }
    }

    /// Starts a fresh pass and takes its first value.
    ///
    /// Returns false if the fresh pass is empty.
    pub(crate) fn restart(&mut self) -> bool {
        self.pass = Some(self.generator.values());
        self.taken = 0;
        self.step()
    }

    /// Takes the next value, restarting once if the current pass is spent.
    pub(crate) fn advance(&mut self) -> Advance {
        if self.step() {
            return Advance::Next;
        }
        let started = self.pass.is_some();
        if self.restart() {
            if started {
                Advance::Wrapped
            } else {
                Advance::Next
            }
        } else {
            Advance::Empty
        }
    }

    /// Index of the current value within its pass.
    pub(crate) fn position(&self) -> usize {
        self.taken.saturating_sub(1)
    }

    pub(crate) fn value(&self) -> &ParamValue {
        &self.value
    }
}

/// Current values of all cursors, in generator order.
pub(crate) fn snapshot(cursors: &[Cursor<'_>]) -> Vec<ParamValue> {
    cursors.iter().map(|c| c.value().clone()).collect()
}
