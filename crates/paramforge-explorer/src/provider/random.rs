//! Random single-parameter changes with bounded duplicate avoidance.

use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::sync::{Mutex, PoisonError};

use paramforge_config::RandomConfig;
use paramforge_core::{ParamTuple, SharedGenerator};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use tracing::trace;

use super::cursor::{snapshot, Advance, Cursor};
use super::session::{EndReason, Session};
use super::{ParamProvider, ParamStream};

type Positions = SmallVec<[usize; 8]>;

/// Advances one randomly chosen generator per tuple.
///
/// The first tuple holds the first value of every generator. After that a
/// uniformly random index is advanced (restarting its generator when
/// exhausted), and the tuple is only emitted if the vector of per-generator
/// positions was not seen before. The seen set is cleared when it reaches
/// `dedup_capacity`, and `max_consecutive_duplicates` colliding draws in a
/// row end the stream.
///
/// Each stream draws its own generator seed from the provider's master RNG,
/// so a seeded provider yields the same sequence of streams every run.
///
/// # Example
///
/// ```
/// use paramforge_core::{fixed, ParamGeneratorExt};
/// use paramforge_explorer::{ParamProvider, RandomSingleParamChange};
///
/// let generators = || vec![
///     fixed(vec![1, 2, 3]).into_param().shared(),
///     fixed(vec![4, 5]).into_param().shared(),
/// ];
/// let first: Vec<_> = RandomSingleParamChange::with_seed(generators(), 42).stream().collect();
/// let second: Vec<_> = RandomSingleParamChange::with_seed(generators(), 42).stream().collect();
/// assert_eq!(first, second);
/// // 3 * 2 distinct position vectors at most
/// assert!(first.len() <= 6);
/// ```
pub struct RandomSingleParamChange {
    generators: Vec<SharedGenerator>,
    rng: Mutex<ChaCha8Rng>,
    dedup_capacity: usize,
    max_consecutive_duplicates: usize,
}

impl RandomSingleParamChange {
    /// Creates a provider with default limits and an OS-seeded RNG.
    pub fn new(generators: Vec<SharedGenerator>) -> Self {
        Self::with_config(generators, &RandomConfig::default())
    }

    /// Creates a provider with default limits and a fixed seed.
    pub fn with_seed(generators: Vec<SharedGenerator>, seed: u64) -> Self {
        Self::with_config(generators, &RandomConfig::default().with_seed(seed))
    }

    pub fn with_config(generators: Vec<SharedGenerator>, config: &RandomConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_rng(
            generators,
            rng,
            config.dedup_capacity,
            config.max_consecutive_duplicates,
        )
    }

    /// Creates a provider driven by a caller-supplied master RNG.
    ///
    /// Every stream forks its own RNG from `rng`, so equal RNG states give
    /// equal sequences of streams.
    pub fn with_rng(
        generators: Vec<SharedGenerator>,
        rng: ChaCha8Rng,
        dedup_capacity: usize,
        max_consecutive_duplicates: usize,
    ) -> Self {
        Self {
            generators,
            rng: Mutex::new(rng),
            dedup_capacity,
            // a limit of zero could never emit
            max_consecutive_duplicates: max_consecutive_duplicates.max(1),
        }
    }

    pub fn dedup_capacity(&self) -> usize {
        self.dedup_capacity
    }

    pub fn max_consecutive_duplicates(&self) -> usize {
        self.max_consecutive_duplicates
    }

    fn fork_rng(&self) -> ChaCha8Rng {
        let mut master = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        ChaCha8Rng::seed_from_u64(master.random())
    }
}

impl Debug for RandomSingleParamChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSingleParamChange")
            .field("generators", &self.generators)
            .field("dedup_capacity", &self.dedup_capacity)
            .field("max_consecutive_duplicates", &self.max_consecutive_duplicates)
            .finish()
    }
}

impl ParamProvider for RandomSingleParamChange {
    fn generators(&self) -> &[SharedGenerator] {
        &self.generators
    }

    fn name(&self) -> &'static str {
        "random_single"
    }

    fn stream(&self) -> ParamStream<'_> {
        let arity = self.generators.len();
        Box::new(RandomStream {
            cursors: self.generators.iter().map(|g| Cursor::new(&**g)).collect(),
            positions: SmallVec::from_elem(0, arity),
            seen: HashSet::new(),
            rng: self.fork_rng(),
            started: false,
            dedup_capacity: self.dedup_capacity,
            max_consecutive_duplicates: self.max_consecutive_duplicates,
            session: Session::start(self.name(), arity),
        })
    }
}

struct RandomStream<'a> {
    cursors: Vec<Cursor<'a>>,
    positions: Positions,
    seen: HashSet<Positions>,
    rng: ChaCha8Rng,
    started: bool,
    dedup_capacity: usize,
    max_consecutive_duplicates: usize,
    session: Session,
}

impl RandomStream<'_> {
    // Moves to the next candidate position vector. False if a generator
    // turned out to be empty.
    fn draw(&mut self) -> bool {
        if !self.started {
            self.started = true;
            return self.cursors.iter_mut().all(|c| c.advance() != Advance::Empty);
        }
        let index = self.rng.random_range(0..self.cursors.len());
        match self.cursors[index].advance() {
            Advance::Next => {}
            Advance::Wrapped => self.session.wrapped(index),
            Advance::Empty => return false,
        }
        self.positions[index] = self.cursors[index].position();
        true
    }
}

impl Iterator for RandomStream<'_> {
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

        let mut attempts = 0;
        loop {
            if attempts >= self.max_consecutive_duplicates {
                return self.session.end(EndReason::Plateau);
            }
            attempts += 1;

            if self.seen.len() >= self.dedup_capacity {
                trace!(event = "dedup_reset", capacity = self.dedup_capacity as u64);
                self.seen.clear();
            }
            if !self.draw() {
                return self.session.end(EndReason::EmptyGenerator);
            }
            if self.seen.insert(self.positions.clone()) {
                return self.session.emit(snapshot(&self.cursors));
            }
        }
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod tests;
