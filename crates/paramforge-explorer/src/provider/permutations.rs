//! Exhaustive cartesian product.

use paramforge_core::{ParamForgeError, ParamTuple, Result, SharedGenerator};

use super::cursor::{snapshot, Cursor};
use super::session::{EndReason, Session};
use super::{ParamProvider, ParamStream};

/// Enumerates every combination of values from finite generators.
///
/// The first generator varies slowest and the last fastest. Inner
/// generators are re-traversed with a fresh pass for every combination of
/// the outer ones, so nothing is buffered.
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, ParamGeneratorExt, ParamValue};
/// use paramforge_explorer::{AllPermutations, ParamProvider};
///
/// let provider = AllPermutations::new(vec![
///     fixed(vec![true, false]).into_param().shared(),
///     fixed(vec![1, 2, 3]).into_param().shared(),
/// ]).unwrap();
/// let tuples: Vec<_> = provider.stream().collect();
/// assert_eq!(tuples.len(), 6);
/// assert_eq!(tuples[1], vec![ParamValue::Bool(true), ParamValue::Int(2)]);
/// ```
#[derive(Debug)]
pub struct AllPermutations {
    generators: Vec<SharedGenerator>,
}

impl AllPermutations {
    /// Creates the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ParamForgeError::InfiniteGenerator`] naming the first
    /// infinite generator.
    pub fn new(generators: Vec<SharedGenerator>) -> Result<Self> {
        if let Some(index) = generators.iter().position(|g| g.is_infinite()) {
            return Err(ParamForgeError::InfiniteGenerator { index });
        }
        Ok(Self { generators })
    }
}

impl ParamProvider for AllPermutations {
    fn generators(&self) -> &[SharedGenerator] {
        &self.generators
    }

    fn name(&self) -> &'static str {
        "all_permutations"
    }

    fn stream(&self) -> ParamStream<'_> {
        Box::new(PermutationStream {
            cursors: self.generators.iter().map(|g| Cursor::new(&**g)).collect(),
            started: false,
            session: Session::start(self.name(), self.generators.len()),
        })
    }
}

struct PermutationStream<'a> {
    cursors: Vec<Cursor<'a>>,
    started: bool,
    session: Session,
}

impl PermutationStream<'_> {
    // Steps the rightmost cursor before `end` whose pass still has values.
    fn step_before(&mut self, end: usize) -> Option<usize> {
        (0..end).rev().find(|&i| self.cursors[i].step())
    }

    // Restarts cursors `from..` and takes their first values. A fresh pass
    // that is empty contributes no combinations, so the prefix before it
    // moves on instead.
    fn fill_from(&mut self, mut from: usize) -> bool {
        let len = self.cursors.len();
        loop {
            while from < len && self.cursors[from].restart() {
                from += 1;
            }
            if from == len {
                return true;
            }
            match self.step_before(from) {
                Some(stepped) => from = stepped + 1,
                None => return false,
            }
        }
    }

    fn odometer(&mut self) -> bool {
        match self.step_before(self.cursors.len()) {
            Some(stepped) => self.fill_from(stepped + 1),
            None => false,
        }
    }
}

impl Iterator for PermutationStream<'_> {
    type Item = ParamTuple;

    fn next(&mut self) -> Option<ParamTuple> {
        if self.session.is_ended() {
            return None;
        }
        let found = if self.started {
            self.odometer()
        } else {
            self.started = true;
            self.fill_from(0)
        };
        if found {
            self.session.emit(snapshot(&self.cursors))
        } else {
            self.session.end(EndReason::Exhausted)
        }
    }
}
