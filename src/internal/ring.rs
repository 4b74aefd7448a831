//! Single-producer, single-consumer ring of outgoing words.
//!
//! The foreground is the only writer of `head`; the completion interrupt is
//! the only writer of `tail`. Each side only reads the other's index, so the
//! pair needs no lock: publishing stores use `Release` and observing loads use
//! `Acquire`, which orders the slot contents against the index that exposes
//! them.
//!
//! One slot is permanently reserved so a full ring and an empty ring have
//! different index pairs. A ring of `N` slots holds at most `N - 1` words.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::driver::error::{TxError, TxResult};
use crate::internal::constants::{MAX_RING_SLOTS, MIN_RING_SLOTS, WORD_BYTES};

/// Circular word store with atomic head/tail indices.
pub struct TxRing<const N: usize> {
    /// Word slots; read by the DMA engine between `tail` and `head`
    slots: UnsafeCell<[u16; N]>,
    /// Next free slot (producer-owned)
    head: AtomicUsize,
    /// Next word to send (consumer-owned)
    tail: AtomicUsize,
}

// SAFETY: The producer only writes slots outside `[tail, head)` and then
// publishes them with a `Release` store of `head`. The consumer only reads
// slots inside `[tail, head)` after an `Acquire` load of `head`. No slot is
// written while it can be read.
unsafe impl<const N: usize> Sync for TxRing<N> {}

impl<const N: usize> TxRing<N> {
    const SIZE_OK: () = assert!(
        N >= MIN_RING_SLOTS && N <= MAX_RING_SLOTS,
        "ring size must be between 2 and 256 slots"
    );

    /// Create an empty ring. Const-compatible.
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::SIZE_OK;
        Self {
            slots: UnsafeCell::new([0; N]),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        }
    }

    /// Number of physical slots
    #[inline(always)]
    pub const fn slots(&self) -> usize {
        N
    }

    /// Largest number of words the ring can hold
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Current head index
    #[inline(always)]
    pub fn head(&self) -> usize {
        self.head.load(Ordering::Acquire)
    }

    /// Current tail index
    #[inline(always)]
    pub fn tail(&self) -> usize {
        self.tail.load(Ordering::Acquire)
    }

    /// Words queued and not yet retired
    #[inline]
    pub fn occupancy(&self) -> usize {
        Self::distance(self.tail(), self.head())
    }

    /// Free slots a producer may fill
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity() - self.occupancy()
    }

    /// Copy `words` in at `head`, all or nothing.
    ///
    /// Must only be called from the producer context.
    pub fn enqueue(&self, words: &[u16]) -> TxResult<()> {
        let head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Acquire);
        let free = self.capacity() - Self::distance(tail, head);

        if words.len() > free {
            return Err(TxError::BufferFull);
        }
        if words.is_empty() {
            return Ok(());
        }

        let base = self.slots.get().cast::<u16>();
        for (i, &word) in words.iter().enumerate() {
            // SAFETY: `(head + i) % N` is in bounds and lies in the free region,
            // which the consumer never reads.
            unsafe { base.add((head + i) % N).write(word) };
        }

        self.head.store((head + words.len()) % N, Ordering::Release);
        Ok(())
    }

    /// Length of the next burst: queued words up to the physical end of the store.
    #[inline]
    pub fn contiguous_run(&self) -> usize {
        let tail = self.tail();
        let queued = Self::distance(tail, self.head());
        core::cmp::min(queued, N - tail)
    }

    /// Word at `index`.
    ///
    /// Must only be used for indices inside the queued region.
    #[inline]
    pub fn word_at(&self, index: usize) -> u16 {
        // SAFETY: queued slots are not written by the producer.
        unsafe { self.slots.get().cast::<u16>().add(index % N).read() }
    }

    /// Bus address of the slot at `index` (for the DMA source register)
    #[inline]
    pub fn slot_addr(&self, index: usize) -> usize {
        self.slots.get() as usize + (index % N) * WORD_BYTES
    }

    /// Advance `tail` past `count` transmitted words.
    ///
    /// Must only be called from the consumer context, with `count` no larger
    /// than the occupancy observed when the burst was armed.
    pub fn retire(&self, count: usize) {
        let tail = self.tail.load(Ordering::Relaxed);
        debug_assert!(count <= Self::distance(tail, self.head.load(Ordering::Acquire)));
        self.tail.store((tail + count) % N, Ordering::Release);
    }

    /// Number of words from `from` up to `to`, going forward around the ring
    #[inline(always)]
    const fn distance(from: usize, to: usize) -> usize {
        (to + N - from) % N
    }
}

impl<const N: usize> Default for TxRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
