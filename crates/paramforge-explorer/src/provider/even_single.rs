//! Round-robin single-parameter changes.

use paramforge_core::{ParamTuple, SharedGenerator};

use super::cursor::{snapshot, Advance, Cursor};
use super::session::{EndReason, Session};
use super::{ParamProvider, ParamStream};

/// Changes exactly one parameter per tuple, left to right.
///
/// The first tuple holds the first value of every generator. Each following
/// tuple advances the next generator in round-robin order while the other
/// positions keep their last value. With completion enabled the stream ends
/// when the last generator to wrap does so.
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, ParamGeneratorExt, ParamValue};
/// use paramforge_explorer::{EvenSingleParamChange, ParamProvider};
///
/// let provider = EvenSingleParamChange::new(vec![
///     fixed(vec![1, 2]).into_param().shared(),
///     fixed(vec![10, 20, 30]).into_param().shared(),
/// ]);
/// let tuples: Vec<_> = provider.stream().collect();
/// assert_eq!(tuples.len(), 6);
/// assert_eq!(tuples[0], vec![ParamValue::Int(1), ParamValue::Int(10)]);
/// assert_eq!(tuples[1], vec![ParamValue::Int(2), ParamValue::Int(10)]);
/// ```
#[derive(Debug)]
pub struct EvenSingleParamChange {
    generators: Vec<SharedGenerator>,
    complete_when_all_cycled: bool,
}

impl EvenSingleParamChange {
    /// Creates a provider that ends once every generator has cycled.
    pub fn new(generators: Vec<SharedGenerator>) -> Self {
        Self::with_completion(generators, true)
    }

    pub fn with_completion(generators: Vec<SharedGenerator>, complete_when_all_cycled: bool) -> Self {
        Self {
            generators,
            complete_when_all_cycled,
        }
    }

    pub fn completes_when_all_cycled(&self) -> bool {
        self.complete_when_all_cycled
    }
}

impl ParamProvider for EvenSingleParamChange {
    fn generators(&self) -> &[SharedGenerator] {
        &self.generators
    }

    fn name(&self) -> &'static str {
        "even_single"
    }

    fn stream(&self) -> ParamStream<'_> {
        Box::new(EvenSingleStream {
            cursors: self.generators.iter().map(|g| Cursor::new(&**g)).collect(),
            wrapped: vec![false; self.generators.len()],
            next_index: 0,
            started: false,
            complete_when_all_cycled: self.complete_when_all_cycled,
            session: Session::start(self.name(), self.generators.len()),
        })
    }
}

struct EvenSingleStream<'a> {
    cursors: Vec<Cursor<'a>>,
    wrapped: Vec<bool>,
    next_index: usize,
    started: bool,
    complete_when_all_cycled: bool,
    session: Session,
}

impl Iterator for EvenSingleStream<'_> {
    type Item = ParamTuple;

    fn next(&mut self) -> Option<ParamTuple> {
        if self.session.is_ended() {
            return None;
        }
        if self.cursors.is_empty() {
            let tuple = self.session.emit(Vec::new());
            self.session.end(EndReason::Exhausted);
            return tuple;
        }

        if !self.started {
            self.started = true;
            for cursor in &mut self.cursors {
                if cursor.advance() == Advance::Empty {
                    return self.session.end(EndReason::EmptyGenerator);
                }
            }
            return self.session.emit(snapshot(&self.cursors));
        }

        let index = self.next_index;
        match self.cursors[index].advance() {
            Advance::Next => {}
            Advance::Wrapped => {
                self.session.wrapped(index);
                if self.complete_when_all_cycled && !self.wrapped[index] {
                    self.wrapped[index] = true;
                    if self.wrapped.iter().all(|&w| w) {
                        return self.session.end(EndReason::AllCycled);
                    }
                }
            }
            Advance::Empty => return self.session.end(EndReason::EmptyGenerator),
        }
        self.next_index = (index + 1) % self.cursors.len();
        self.session.emit(snapshot(&self.cursors))
    }
}
