//! Splitting generators between two sub-providers.

use std::iter::Peekable;

use paramforge_core::{ParamTuple, ParamValue, Result, SharedGenerator};

use super::session::{EndReason, Session};
use super::{ParamProvider, ParamStream};

/// Routes generators to two sub-providers by predicate and merges their
/// tuples back into parameter order.
///
/// The predicate sees `(index, generator)` once, at construction. If one
/// side ends up empty the provider simply delegates to the other side.
/// Otherwise every tuple combines one tuple from each side; a side whose
/// stream ends is restarted and marked as completed. With
/// `stop_when_both_completed` (the default) the stream ends once both sides
/// have completed at least once.
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, ParamGeneratorExt};
/// use paramforge_explorer::{AllPermutations, EvenSingleParamChange, ParamProvider, Partitioned};
///
/// let provider = Partitioned::new(
///     vec![
///         fixed(vec![1, 2]).into_param().shared(),
///         fixed(vec![3, 4, 5]).into_param().shared(),
///         fixed(vec![6]).into_param().shared(),
///     ],
///     |index, _| index == 0,
///     |gens| Ok(Box::new(AllPermutations::new(gens)?)),
///     |gens| Ok(Box::new(EvenSingleParamChange::new(gens))),
/// ).unwrap();
/// assert_eq!(provider.arity(), 3);
/// assert!(provider.stream().all(|tuple| tuple.len() == 3));
/// ```
#[derive(Debug)]
pub struct Partitioned {
    generators: Vec<SharedGenerator>,
    layout: Layout,
    stop_when_both_completed: bool,
}

#[derive(Debug)]
enum Layout {
    Single(Box<dyn ParamProvider>),
    Split { left: Side, right: Side },
}

#[derive(Debug)]
struct Side {
    provider: Box<dyn ParamProvider>,
    indices: Vec<usize>,
}

impl Partitioned {
    /// Splits `generators` and builds one sub-provider per non-empty side.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by a factory.
    pub fn new<P, T, F>(
        generators: Vec<SharedGenerator>,
        predicate: P,
        true_side: T,
        false_side: F,
    ) -> Result<Self>
    where
        P: Fn(usize, &SharedGenerator) -> bool,
        T: FnOnce(Vec<SharedGenerator>) -> Result<Box<dyn ParamProvider>>,
        F: FnOnce(Vec<SharedGenerator>) -> Result<Box<dyn ParamProvider>>,
    {
        let mut left = (Vec::new(), Vec::new());
        let mut right = (Vec::new(), Vec::new());
        for (index, generator) in generators.iter().enumerate() {
            let side = if predicate(index, generator) {
                &mut left
            } else {
                &mut right
            };
            side.0.push(index);
            side.1.push(generator.clone());
        }

        let layout = if left.0.is_empty() {
            Layout::Single(false_side(right.1)?)
        } else if right.0.is_empty() {
            Layout::Single(true_side(left.1)?)
        } else {
            Layout::Split {
                left: Side {
                    provider: true_side(left.1)?,
                    indices: left.0,
                },
                right: Side {
                    provider: false_side(right.1)?,
                    indices: right.0,
                },
            }
        };

        Ok(Self {
            generators,
            layout,
            stop_when_both_completed: true,
        })
    }

    /// Sets whether the stream ends once both sides have completed.
    pub fn with_stop_when_both_completed(mut self, stop: bool) -> Self {
        self.stop_when_both_completed = stop;
        self
    }

    pub fn stops_when_both_completed(&self) -> bool {
        self.stop_when_both_completed
    }

    /// Original indices of the true and false sides, or `None` when every
    /// generator landed on the same side.
    pub fn split(&self) -> Option<(&[usize], &[usize])> {
        match &self.layout {
            Layout::Split { left, right } => Some((&left.indices, &right.indices)),
            Layout::Single(_) => None,
        }
    }
}

impl ParamProvider for Partitioned {
    fn generators(&self) -> &[SharedGenerator] {
        &self.generators
    }

    fn name(&self) -> &'static str {
        "partitioned"
    }

    fn stream(&self) -> ParamStream<'_> {
        match &self.layout {
            Layout::Single(provider) => provider.stream(),
            Layout::Split { left, right } => Box::new(SplitStream {
                arity: self.generators.len(),
                left: SideStream::new(left),
                right: SideStream::new(right),
                stop_when_both_completed: self.stop_when_both_completed,
                session: Session::start(self.name(), self.generators.len()),
            }),
        }
    }
}

struct SideStream<'a> {
    side: &'a Side,
    stream: Peekable<ParamStream<'a>>,
    completed: bool,
}

impl<'a> SideStream<'a> {
    fn new(side: &'a Side) -> Self {
        Self {
            side,
            stream: side.provider.stream().peekable(),
            completed: false,
        }
    }

    // Restarts an ended stream. False if even the fresh stream is empty.
    fn ready(&mut self) -> bool {
        if self.stream.peek().is_some() {
            return true;
        }
        self.completed = true;
        self.stream = self.side.provider.stream().peekable();
        self.stream.peek().is_some()
    }

    fn scatter_into(&mut self, tuple: &mut [ParamValue]) {
        if let Some(values) = self.stream.next() {
            for (&index, value) in self.side.indices.iter().zip(values) {
                tuple[index] = value;
            }
        }
    }
}

struct SplitStream<'a> {
    arity: usize,
    left: SideStream<'a>,
    right: SideStream<'a>,
    stop_when_both_completed: bool,
    session: Session,
}

impl Iterator for SplitStream<'_> {
    type Item = ParamTuple;

    fn next(&mut self) -> Option<ParamTuple> {
        if self.session.is_ended() {
            return None;
        }
        let left_ready = self.left.ready();
        let right_ready = self.right.ready();
        if self.stop_when_both_completed && self.left.completed && self.right.completed {
            return self.session.end(EndReason::BothCompleted);
        }
        if !left_ready || !right_ready {
            return self.session.end(EndReason::EmptyGenerator);
        }

        let mut tuple = vec![ParamValue::Null; self.arity];
        self.left.scatter_into(&mut tuple);
        self.right.scatter_into(&mut tuple);
        self.session.emit(tuple)
    }
}

#[cfg(test)]
#[path = "partitioned_tests.rs"]
mod tests;
