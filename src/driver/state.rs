//! Burst state machine and transfer session.
//!
//! ```text
//! Idle --(chunker claims)--> Armed --(first word pushed, start)--> Running
//!   ^                          |                                      |
//!   |                     (run <= 1)                       (DMA completion)
//!   |                          v                                      v
//!   +------------------------ Idle <--(tail advanced)-------------- Retiring
//! ```
//!
//! After `Retiring -> Idle` the completion handler invokes the chunker, which
//! may move straight on to `Armed`.
//!
//! The `Idle -> Armed` compare-exchange is the ownership token for the
//! descriptor, the session and the peripheral while a burst is being set up.
//! Whichever context wins it programs the hardware; the loser backs off.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// Burst state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TxState {
    /// No burst in flight
    #[default]
    Idle = 0,
    /// Descriptor programmed and DMA enabled, first word not yet pushed
    Armed = 1,
    /// First word pushed and start issued, hardware shifting the rest
    Running = 2,
    /// Completion observed, tail not yet advanced
    Retiring = 3,
}

impl TxState {
    /// Decode the stored representation
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => TxState::Armed,
            2 => TxState::Running,
            3 => TxState::Retiring,
            _ => TxState::Idle,
        }
    }

    /// Whether `self -> next` is an edge of the state machine
    #[must_use]
    pub const fn can_transition_to(self, next: TxState) -> bool {
        matches!(
            (self, next),
            (TxState::Idle, TxState::Armed)
                | (TxState::Armed, TxState::Running | TxState::Idle)
                | (TxState::Running, TxState::Retiring)
                | (TxState::Retiring, TxState::Idle)
        )
    }
}

/// Atomically shared [`TxState`]
pub(crate) struct StateCell {
    raw: AtomicU8,
}

impl StateCell {
    pub(crate) const fn new() -> Self {
        Self {
            raw: AtomicU8::new(TxState::Idle as u8),
        }
    }

    #[inline]
    pub(crate) fn get(&self) -> TxState {
        TxState::from_u8(self.raw.load(Ordering::Acquire))
    }

    /// Move `from -> to` if the current state is `from`.
    #[inline]
    pub(crate) fn transition(&self, from: TxState, to: TxState) -> bool {
        debug_assert!(from.can_transition_to(to));
        self.raw
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Word count committed to the in-flight burst.
///
/// Created when a burst is armed and consumed exactly once by the next
/// completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransferSession {
    /// Words the completion will retire
    pub words: usize,
}

/// Storage for the single outstanding [`TransferSession`] (0 = none)
pub(crate) struct SessionSlot {
    words: AtomicUsize,
}

impl SessionSlot {
    pub(crate) const fn new() -> Self {
        Self {
            words: AtomicUsize::new(0),
        }
    }

    pub(crate) fn commit(&self, session: TransferSession) {
        self.words.store(session.words, Ordering::Release);
    }

    pub(crate) fn peek(&self) -> Option<TransferSession> {
        match self.words.load(Ordering::Acquire) {
            0 => None,
            words => Some(TransferSession { words }),
        }
    }

    /// Take the session, leaving the slot empty.
    pub(crate) fn take(&self) -> Option<TransferSession> {
        match self.words.swap(0, Ordering::AcqRel) {
            0 => None,
            words => Some(TransferSession { words }),
        }
    }
}
