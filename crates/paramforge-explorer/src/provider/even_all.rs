//! Lock-step advancement of every generator.

use paramforge_core::{ParamTuple, SharedGenerator};

use super::cursor::{snapshot, Advance, Cursor};
use super::session::{EndReason, Session};
use super::{ParamProvider, ParamStream};

/// Advances every generator by one value per tuple.
///
/// Exhausted generators are restarted before their next value is taken.
/// With completion enabled the stream ends as soon as every generator has
/// wrapped at least once; otherwise it cycles forever.
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, ParamGeneratorExt};
/// use paramforge_explorer::{EvenAllParamChange, ParamProvider};
///
/// let provider = EvenAllParamChange::new(vec![
///     fixed(vec![1, 2]).into_param().shared(),
///     fixed(vec![10, 20, 30]).into_param().shared(),
/// ]);
/// assert_eq!(provider.stream().count(), 3);
/// ```
#[derive(Debug)]
pub struct EvenAllParamChange {
    generators: Vec<SharedGenerator>,
    complete_when_all_cycled: bool,
}

impl EvenAllParamChange {
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

impl ParamProvider for EvenAllParamChange {
    fn generators(&self) -> &[SharedGenerator] {
        &self.generators
    }

    fn name(&self) -> &'static str {
        "even_all"
    }

    fn stream(&self) -> ParamStream<'_> {
        Box::new(EvenAllStream {
            cursors: self.generators.iter().map(|g| Cursor::new(&**g)).collect(),
            wrapped: vec![false; self.generators.len()],
            complete_when_all_cycled: self.complete_when_all_cycled,
            session: Session::start(self.name(), self.generators.len()),
        })
    }
}

struct EvenAllStream<'a> {
    cursors: Vec<Cursor<'a>>,
    wrapped: Vec<bool>,
    complete_when_all_cycled: bool,
    session: Session,
}

impl Iterator for EvenAllStream<'_> {
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

        for index in 0..self.cursors.len() {
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
        }
        self.session.emit(snapshot(&self.cursors))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use paramforge_core::ParamValue;
    use paramforge_test::{counter, ints, strs, RecordingGenerator};

    fn s(v: &str) -> ParamValue {
        ParamValue::from(v)
    }

    #[test]
    fn every_position_changes_on_every_tuple() {
        let provider = EvenAllParamChange::new(vec![strs(&["a", "b"]), strs(&["x", "y", "z"])]);
        let tuples: Vec<_> = provider.stream().collect();
        assert_eq!(
            tuples,
            vec![
                vec![s("a"), s("x")],
                vec![s("b"), s("y")],
                vec![s("a"), s("z")],
            ]
        );
    }

    #[test]
    fn cycles_forever_without_completion() {
        let provider =
            EvenAllParamChange::with_completion(vec![strs(&["a", "b"]), strs(&["x", "y", "z"])], false);
        let tuples: Vec<_> = provider.stream().take(7).collect();
        assert_eq!(tuples.len(), 7);
        assert_eq!(tuples[3], vec![s("b"), s("x")]);
        assert_eq!(tuples[6], tuples[0]);
    }

    #[test]
    fn infinite_generators_keep_the_stream_open() {
        let provider = EvenAllParamChange::new(vec![ints(&[1]), counter()]);
        let tuples: Vec<_> = provider.stream().take(100).collect();
        assert_eq!(tuples.len(), 100);
        assert_eq!(tuples[99], vec![ParamValue::Int(1), ParamValue::Long(99)]);
    }

    #[test]
    fn exhausted_generators_are_restarted() {
        let recording = Arc::new(RecordingGenerator::new([ParamValue::Int(1), ParamValue::Int(2)]));
        let provider = EvenAllParamChange::new(vec![recording.clone(), strs(&["x", "y", "z", "w"])]);
        assert_eq!(provider.stream().count(), 4);
        // initial pass plus two restarts
        assert_eq!(recording.passes(), 3);
    }

    #[test]
    fn empty_generator_ends_the_stream() {
        let provider = EvenAllParamChange::new(vec![strs(&["a"]), strs(&[])]);
        assert_eq!(provider.stream().count(), 0);
    }

    #[test]
    fn zero_arity_yields_one_empty_tuple() {
        let provider = EvenAllParamChange::new(Vec::new());
        assert_eq!(provider.stream().collect::<Vec<_>>(), vec![Vec::<ParamValue>::new()]);
    }
}
