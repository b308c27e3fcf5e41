//! Closure-backed generators.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use super::{ParamGenerator, ValueIter};

/// A generator whose passes come from a closure.
///
/// The closure is called once per pass. Cardinality cannot be inferred
/// from an arbitrary iterator, so the caller declares it.
///
/// # Example
///
/// ```
/// use paramforge_core::{from_fn, ParamGenerator};
///
/// let naturals = from_fn(true, || 0u64..);
/// assert!(naturals.is_infinite());
/// assert_eq!(naturals.values().take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub struct FnGenerator<T, F> {
    pass: F,
    infinite: bool,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, F> FnGenerator<T, F> {
    pub fn new(infinite: bool, pass: F) -> Self {
        Self {
            pass,
            infinite,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> Debug for FnGenerator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnGenerator")
            .field("infinite", &self.infinite)
            .finish()
    }
}

impl<T, F, I> ParamGenerator<T> for FnGenerator<T, F>
where
    F: Fn() -> I + Send + Sync,
    I: Iterator<Item = T> + Send + 'static,
{
    fn values(&self) -> ValueIter<'_, T> {
        Box::new((self.pass)())
    }

    fn is_infinite(&self) -> bool {
        self.infinite
    }
}

/// Shorthand for [`FnGenerator::new`].
pub fn from_fn<T, F, I>(infinite: bool, pass: F) -> FnGenerator<T, F>
where
    F: Fn() -> I + Send + Sync,
    I: Iterator<Item = T> + Send + 'static,
{
    FnGenerator::new(infinite, pass)
}
