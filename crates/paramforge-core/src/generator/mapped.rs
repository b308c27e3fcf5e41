//! Value adapters over an inner generator.
//!
//! Both adapters keep the inner generator's cardinality and forward
//! feedback and `close` to it.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use super::{ParamGenerator, ValueIter};
use crate::error::Result;
use crate::record::ExecutionRecord;
use crate::value::ParamValue;

/// Maps values of an inner generator, dropping the ones `to` rejects.
///
/// Created by [`ParamGenerator::map`].
pub struct Mapped<G, T, U, To, Back> {
    inner: G,
    to: To,
    from: Back,
    _phantom: PhantomData<fn(T) -> U>,
}

impl<G, T, U, To, Back> Mapped<G, T, U, To, Back> {
    pub fn new(inner: G, to: To, from: Back) -> Self {
        Self {
            inner,
            to,
            from,
            _phantom: PhantomData,
        }
    }

    /// Returns the adapted generator.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Debug, T, U, To, Back> Debug for Mapped<G, T, U, To, Back> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped").field("inner", &self.inner).finish()
    }
}

impl<G, T, U, To, Back> ParamGenerator<U> for Mapped<G, T, U, To, Back>
where
    G: ParamGenerator<T>,
    To: Fn(T) -> Option<U> + Send + Sync,
    Back: Fn(&U) -> T + Send + Sync,
{
    fn values(&self) -> ValueIter<'_, U> {
        let to = &self.to;
        Box::new(self.inner.values().filter_map(to))
    }

    fn is_infinite(&self) -> bool {
        self.inner.is_infinite()
    }

    fn on_complete(&self, record: &ExecutionRecord, index: usize, value: &U) {
        self.inner.on_complete(record, index, &(self.from)(value));
    }

    fn close(&self) -> Result<()> {
        self.inner.close()
    }
}

/// Lifts a typed generator into [`ParamValue`] space.
///
/// Created by [`ParamGeneratorExt::into_param`](super::ParamGeneratorExt::into_param).
pub struct IntoParam<G, T> {
    inner: G,
    _phantom: PhantomData<fn() -> T>,
}

impl<G, T> IntoParam<G, T> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
    }
}

impl<G: Debug, T> Debug for IntoParam<G, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoParam").field("inner", &self.inner).finish()
    }
}

impl<G, T> ParamGenerator<ParamValue> for IntoParam<G, T>
where
    G: ParamGenerator<T>,
    T: Into<ParamValue> + TryFrom<ParamValue>,
{
    fn values(&self) -> ValueIter<'_, ParamValue> {
        Box::new(self.inner.values().map(Into::into))
    }

    fn is_infinite(&self) -> bool {
        self.inner.is_infinite()
    }

    fn on_complete(&self, record: &ExecutionRecord, index: usize, value: &ParamValue) {
        if let Ok(value) = T::try_from(value.clone()) {
            self.inner.on_complete(record, index, &value);
        }
    }

    fn close(&self) -> Result<()> {
        self.inner.close()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::error::ParamForgeError;
    use crate::generator::{fixed, from_fn, FixedGenerator, ParamGeneratorExt};
    use crate::record::FunctionRef;

    #[derive(Debug, Default)]
    struct Feedback {
        seen: Mutex<Vec<(usize, i32)>>,
        closed: AtomicUsize,
    }

    #[derive(Debug)]
    struct Listening {
        values: FixedGenerator<i32>,
        feedback: Feedback,
    }

    impl ParamGenerator<i32> for Listening {
        fn values(&self) -> ValueIter<'_, i32> {
            self.values.values()
        }

        fn is_infinite(&self) -> bool {
            false
        }

        fn on_complete(&self, _record: &ExecutionRecord, index: usize, value: &i32) {
            self.feedback.seen.lock().unwrap().push((index, *value));
        }

        fn close(&self) -> Result<()> {
            self.feedback.closed.fetch_add(1, Ordering::SeqCst);
            Err(ParamForgeError::Resource("handle already released".into()))
        }
    }

    fn record() -> ExecutionRecord {
        ExecutionRecord::succeeded(FunctionRef::new("f"), vec![], None)
    }

    #[test]
    fn rejected_values_are_skipped_in_order() {
        let generator = fixed(vec![1, -2, 3, -4, 5]).map(
            |v: i32| (v > 0).then_some(v * 10),
            |u: &i32| u / 10,
        );
        assert_eq!(generator.values().collect::<Vec<_>>(), vec![10, 30, 50]);
    }

    #[test]
    fn mapping_is_lazy() {
        let calls = AtomicUsize::new(0);
        let generator = from_fn(true, || 0i32..).map(
            |v| {
                calls.fetch_add(1, Ordering::SeqCst);
                Some(v)
            },
            |u: &i32| *u,
        );
        let pass = generator.values();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(pass.take(2).count(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(generator.is_infinite());
    }

    #[test]
    fn feedback_is_converted_back_to_the_inner_value() {
        let generator = Listening {
            values: fixed(vec![1, 2]),
            feedback: Feedback::default(),
        }
        .map(|v| Some(v.to_string()), |s: &String| s.parse().unwrap_or(-1));

        generator.on_complete(&record(), 3, &"2".to_string());
        assert_eq!(*generator.inner().feedback.seen.lock().unwrap(), vec![(3, 2)]);
    }

    #[test]
    fn close_reaches_the_inner_generator() {
        let generator = Listening {
            values: fixed(vec![1]),
            feedback: Feedback::default(),
        }
        .map(Some, |v: &i32| *v);

        assert!(generator.close().is_err());
        assert_eq!(generator.inner().feedback.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn into_param_drops_feedback_of_the_wrong_kind() {
        let listening = Listening {
            values: fixed(vec![7]),
            feedback: Feedback::default(),
        };
        let generator = listening.into_param();

        assert_eq!(generator.values().collect::<Vec<_>>(), vec![ParamValue::Int(7)]);
        generator.on_complete(&record(), 0, &ParamValue::Int(7));
        generator.on_complete(&record(), 0, &ParamValue::Str("7".into()));
        assert_eq!(
            *generator.inner.feedback.seen.lock().unwrap(),
            vec![(0, 7)]
        );
    }
}
