//! Finite generators over a literal value set.

use std::fmt::{self, Debug};
use std::sync::Arc;

use super::{ParamGenerator, ValueIter};

/// A finite generator that replays a fixed list of values on every pass.
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, ParamGenerator};
///
/// let letters = fixed(["a", "b", "c"]);
/// assert_eq!(letters.values().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// assert_eq!(letters.len(), 3);
/// assert!(!letters.is_infinite());
/// ```
pub struct FixedGenerator<T> {
    values: Arc<[T]>,
}

impl<T> FixedGenerator<T> {
    /// Creates a generator over the given values, in order.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Returns the values.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Clone for FixedGenerator<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T: Debug> Debug for FixedGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedGenerator")
            .field("values", &self.values)
            .finish()
    }
}

impl<T> ParamGenerator<T> for FixedGenerator<T>
where
    T: Clone + Send + Sync + Debug,
{
    fn values(&self) -> ValueIter<'_, T> {
        Box::new(self.values.iter().cloned())
    }

    fn is_infinite(&self) -> bool {
        false
    }
}

/// Shorthand for [`FixedGenerator::new`].
pub fn fixed<T>(values: impl IntoIterator<Item = T>) -> FixedGenerator<T> {
    FixedGenerator::new(values)
}
