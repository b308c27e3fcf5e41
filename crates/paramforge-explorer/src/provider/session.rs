//! Per-stream bookkeeping and lifecycle events.

use paramforge_core::ParamTuple;
use tracing::{debug, trace, warn};

/// Why a stream stopped producing tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EndReason {
    /// Every generator wrapped at least once.
    AllCycled,
    /// A finite enumeration ran out.
    Exhausted,
    /// Too many consecutive duplicate draws.
    Plateau,
    /// Both partition sides completed at least once.
    BothCompleted,
    /// A generator produced no values.
    EmptyGenerator,
}

impl EndReason {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            EndReason::AllCycled => "all_cycled",
            EndReason::Exhausted => "exhausted",
            EndReason::Plateau => "plateau",
            EndReason::BothCompleted => "both_completed",
            EndReason::EmptyGenerator => "empty_generator",
        }
    }
}

/// Counts emitted tuples and logs the start and end of one stream.
#[derive(Debug)]
pub(crate) struct Session {
    provider: &'static str,
    tuples: u64,
    ended: bool,
}

impl Session {
    pub(crate) fn start(provider: &'static str, arity: usize) -> Self {
        debug!(event = "stream_start", provider, arity = arity as u64);
        Self {
            provider,
            tuples: 0,
            ended: false,
        }
    }

    pub(crate) fn is_ended(&self) -> bool {
        self.ended
    }

    pub(crate) fn emit(&mut self, tuple: ParamTuple) -> Option<ParamTuple> {
        self.tuples += 1;
        Some(tuple)
    }

    /// Marks the stream finished. Always returns `None` so callers can
    /// `return self.session.end(..)` from `Iterator::next`.
    pub(crate) fn end(&mut self, reason: EndReason) -> Option<ParamTuple> {
        if self.ended {
            return None;
        }
        self.ended = true;
        if reason == EndReason::EmptyGenerator {
            warn!(
                event = "stream_end",
                provider = self.provider,
                tuples = self.tuples,
                reason = reason.as_str(),
                "generator produced no values"
            );
        } else {
            debug!(
                event = "stream_end",
                provider = self.provider,
                tuples = self.tuples,
                reason = reason.as_str(),
            );
        }
        None
    }

    pub(crate) fn wrapped(&self, index: usize) {
        trace!(
            event = "generator_wrapped",
            provider = self.provider,
            index = index as u64,
        );
    }
}
