//! Per-parameter value generators.
//!
//! A [`ParamGenerator`] is a restartable lazy value source for one
//! parameter. Every call to [`ParamGenerator::values`] starts an
//! independent pass; providers restart a generator simply by asking for a
//! new pass once the current one is exhausted.
//!
//! - [`FixedGenerator`] - a finite literal set
//! - [`FnGenerator`] - a closure-backed source with a declared cardinality
//! - [`Mapped`] - value adapter with none-filtering and feedback routing
//! - [`IntoParam`] - lifts a typed generator into [`ParamValue`] space
//! - [`interesting`] - curated boundary values per numeric width

mod fixed;
mod from_fn;
pub mod interesting;
mod mapped;

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::Result;
use crate::record::ExecutionRecord;
use crate::value::ParamValue;

pub use fixed::{fixed, FixedGenerator};
pub use from_fn::{from_fn, FnGenerator};
pub use interesting::suggested;
pub use mapped::{IntoParam, Mapped};

/// A lazy pass over a generator's values.
pub type ValueIter<'a, T> = Box<dyn Iterator<Item = T> + Send + 'a>;

/// A type-erased generator as stored by providers.
pub type SharedGenerator = Arc<dyn ParamGenerator<ParamValue>>;

/// A restartable value source for one parameter.
///
/// # Type Parameters
/// * `T` - The value type produced by each pass
///
/// # Thread safety
///
/// A single pass is consumed by one thread at a time, but
/// [`on_complete`](Self::on_complete) may arrive concurrently from worker
/// threads. Implementations with feedback-driven state synchronize it
/// themselves.
pub trait ParamGenerator<T>: Send + Sync + Debug {
    /// Starts a fresh pass over the values.
    ///
    /// Calling this has no side effects beyond creating the pass; only
    /// consuming the returned iterator advances any state.
    fn values(&self) -> ValueIter<'_, T>;

    /// Returns true if a pass may never end.
    ///
    /// Feedback-driven sources that cannot be enumerated up front count as
    /// infinite even if each individual pass happens to terminate.
    fn is_infinite(&self) -> bool;

    /// Receives the outcome of an invocation that used `value` at `index`.
    fn on_complete(&self, _record: &ExecutionRecord, _index: usize, _value: &T) {}

    /// Releases held resources. Must tolerate passes that were never consumed.
    fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Adapts the produced values.
    ///
    /// Values for which `to` returns `None` are skipped lazily during
    /// consumption. Feedback is converted back with `from` and forwarded to
    /// this generator.
    ///
    /// # Example
    ///
    /// ```
    /// use paramforge_core::{fixed, ParamGenerator};
    ///
    /// let evens = fixed(vec![1, 2, 3, 4]).map(
    ///     |v: i32| (v % 2 == 0).then(|| v.to_string()),
    ///     |s: &String| s.parse().unwrap_or_default(),
    /// );
    /// let values: Vec<_> = evens.values().collect();
    /// assert_eq!(values, vec!["2".to_string(), "4".to_string()]);
    /// assert!(!evens.is_infinite());
    /// ```
    fn map<U, To, Back>(self, to: To, from: Back) -> Mapped<Self, T, U, To, Back>
    where
        Self: Sized,
        To: Fn(T) -> Option<U> + Send + Sync,
        Back: Fn(&U) -> T + Send + Sync,
    {
        Mapped::new(self, to, from)
    }
}

impl<T, G> ParamGenerator<T> for Arc<G>
where
    G: ParamGenerator<T> + ?Sized,
{
    fn values(&self) -> ValueIter<'_, T> {
        (**self).values()
    }

    fn is_infinite(&self) -> bool {
        (**self).is_infinite()
    }

    fn on_complete(&self, record: &ExecutionRecord, index: usize, value: &T) {
        (**self).on_complete(record, index, value)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }
}

impl<T, G> ParamGenerator<T> for Box<G>
where
    G: ParamGenerator<T> + ?Sized,
{
    fn values(&self) -> ValueIter<'_, T> {
        (**self).values()
    }

    fn is_infinite(&self) -> bool {
        (**self).is_infinite()
    }

    fn on_complete(&self, record: &ExecutionRecord, index: usize, value: &T) {
        (**self).on_complete(record, index, value)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }
}

/// Convenience adapters available on every generator.
pub trait ParamGeneratorExt<T>: ParamGenerator<T> + Sized {
    /// Lifts a typed generator into [`ParamValue`] space.
    ///
    /// Feedback values that do not convert back to `T` are not forwarded.
    fn into_param(self) -> IntoParam<Self, T>
    where
        T: Into<ParamValue> + TryFrom<ParamValue>,
    {
        IntoParam::new(self)
    }

    /// Boxes a [`ParamValue`] generator for use in a provider.
    fn shared(self) -> SharedGenerator
    where
        Self: ParamGenerator<ParamValue> + 'static,
    {
        Arc::new(self)
    }
}

impl<T, G: ParamGenerator<T>> ParamGeneratorExt<T> for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ParamValue;

    #[test]
    fn each_pass_is_independent() {
        let generator = fixed(vec![1, 2, 3]);
        let mut first = generator.values();
        assert_eq!(first.next(), Some(1));

        let second: Vec<_> = generator.values().collect();
        assert_eq!(second, vec![1, 2, 3]);
        assert_eq!(first.next(), Some(2));
    }

    #[test]
    fn shared_generators_delegate() {
        let shared: SharedGenerator = fixed(vec![ParamValue::Int(1)]).shared();
        let again = Arc::clone(&shared);
        assert!(!again.is_infinite());
        assert_eq!(again.values().count(), 1);
        assert!(again.close().is_ok());
    }

    #[test]
    fn typed_generators_lift_into_param_space() {
        let generator = fixed(vec![true, false]).into_param();
        let values: Vec<_> = generator.values().collect();
        assert_eq!(values, vec![ParamValue::Bool(true), ParamValue::Bool(false)]);
    }
}
