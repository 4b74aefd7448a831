//! The transmit engine.
//!
//! [`SpiTx`] owns the word ring and drives one SPI peripheral and one DMA
//! channel through the [`SpiPeripheral`] and [`DmaChannel`] traits.
//!
//! # Execution contexts
//!
//! - Foreground: [`SpiTx::write`] enqueues and kicks the chunker.
//! - Interrupt: [`SpiTx::on_dma_completion`] retires the finished burst and
//!   kicks the chunker again.
//!
//! All methods take `&self`; the engine is meant to live in a `static` and be
//! reached from both contexts without a lock. The ring indices are
//! single-writer atomics and the burst state is claimed with a
//! compare-exchange (see [`crate::driver::state`]).
//!
//! The DMA engine reads words straight out of the ring, so the engine must not
//! move while a burst is in flight. Place it in a `static`.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::driver::config::SpiTxConfig;
use crate::driver::error::{ConfigError, ConfigResult, TxError, TxResult};
use crate::driver::state::{SessionSlot, StateCell, TransferSession, TxState};
use crate::hal::dma::{DmaChannel, DmaDescriptor};
use crate::hal::spi::SpiPeripheral;
use crate::internal::constants::DEFAULT_RING_SLOTS;
use crate::internal::ring::TxRing;

/// DMA-driven SPI transmit engine with an `N`-slot ring (`N - 1` usable words).
///
/// # Example
///
/// ```ignore
/// use ph_spi_dma_tx::{SpiTx, SpiTxConfig};
/// use ph_spi_dma_tx::hal::{GpdmaChannel, Spi};
///
/// static TX: SpiTx<Spi, GpdmaChannel> =
///     SpiTx::new(Spi::spi5(), GpdmaChannel::new(GPDMA1_BASE, 0, SPI5_TX_REQUEST));
///
/// TX.init(&SpiTxConfig::new())?;
/// TX.write(&[cmd_a, cmd_b, cmd_c]).ok();
///
/// #[interrupt]
/// fn GPDMA1_CH0() {
///     TX.on_dma_completion();
/// }
/// ```
pub struct SpiTx<S, D, const N: usize = DEFAULT_RING_SLOTS> {
    spi: S,
    dma: D,
    ring: TxRing<N>,
    state: StateCell,
    session: SessionSlot,
    /// Descriptor programmed for the burst being armed, start not yet issued
    descriptor_armed: AtomicBool,
    /// Completion arrived after `descriptor_armed` and before `Running`
    completion_pending: AtomicBool,
    initialized: AtomicBool,
}

impl<S, D, const N: usize> SpiTx<S, D, N> {
    /// Create an engine around a peripheral and a DMA channel. Const-compatible.
    ///
    /// Call [`init`](Self::init) before writing.
    #[must_use]
    pub const fn new(spi: S, dma: D) -> Self {
        Self {
            spi,
            dma,
            ring: TxRing::new(),
            state: StateCell::new(),
            session: SessionSlot::new(),
            descriptor_armed: AtomicBool::new(false),
            completion_pending: AtomicBool::new(false),
            initialized: AtomicBool::new(false),
        }
    }

    /// The SPI peripheral
    pub fn spi(&self) -> &S {
        &self.spi
    }

    /// The DMA channel
    pub fn dma(&self) -> &D {
        &self.dma
    }

    /// Whether [`init`](Self::init) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Largest number of words the ring can hold (`N - 1`)
    #[inline]
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Free slots a `write` may fill
    #[inline]
    pub fn available(&self) -> usize {
        self.ring.available()
    }

    /// Words queued and not yet retired (includes the in-flight burst)
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.ring.occupancy()
    }

    /// Current burst state
    #[inline]
    pub fn state(&self) -> TxState {
        self.state.get()
    }

    /// Whether no burst is in flight
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state() == TxState::Idle
    }

    /// The session committed to the in-flight burst, if any
    pub fn pending_session(&self) -> Option<TransferSession> {
        self.session.peek()
    }

    fn ensure_initialized(&self) -> TxResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(TxError::NotInitialized)
        }
    }
}

impl<S: SpiPeripheral, D: DmaChannel, const N: usize> SpiTx<S, D, N> {
    /// One-time setup of the peripheral and DMA channel. Leaves the engine `Idle`.
    pub fn init(&self, config: &SpiTxConfig) -> ConfigResult<()> {
        if self.is_initialized() {
            return Err(ConfigError::AlreadyInitialized);
        }
        config.validate()?;

        self.spi.configure(config);
        self.dma.configure(self.spi.tx_data_register());
        self.initialized.store(true, Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "SPI TX ready: sck={} Hz deselect={} ns ring={} words",
            config.sck_hz(),
            config.deselect_ns(),
            N - 1
        );
        #[cfg(feature = "log")]
        log::info!(
            "SPI TX ready: sck={} Hz deselect={} ns ring={} words",
            config.sck_hz(),
            config.deselect_ns(),
            N - 1
        );

        Ok(())
    }

    /// Queue `words` for transmission without blocking.
    ///
    /// Returns [`TxError::BufferFull`] if they do not all fit; nothing is
    /// queued in that case and the caller should retry later. An empty slice
    /// is accepted and does nothing.
    pub fn write(&self, words: &[u16]) -> TxResult<()> {
        self.ensure_initialized()?;

        if let Err(e) = self.ring.enqueue(words) {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "SPI TX dropped {} words ({} available)",
                words.len(),
                self.ring.available()
            );
            #[cfg(feature = "log")]
            log::debug!(
                "SPI TX dropped {} words ({} available)",
                words.len(),
                self.ring.available()
            );
            return Err(e);
        }

        if !words.is_empty() {
            self.pump();
        }
        Ok(())
    }

    /// Send one word and spin until it has fully shifted out.
    ///
    /// Bypasses the ring. Must not be called while a burst is in flight;
    /// this is not checked.
    pub fn write_word_blocking(&self, word: u16) -> TxResult<()> {
        self.ensure_initialized()?;
        self.begin_single_word(word);
        while !self.spi.is_transfer_complete() {
            core::hint::spin_loop();
        }
        Ok(())
    }

    /// Like [`write_word_blocking`](Self::write_word_blocking), but gives up
    /// after `timeout_us` microseconds with [`TxError::Timeout`].
    ///
    /// A frame takes a few microseconds at the default clock, so
    /// [`DEFAULT_BLOCKING_TIMEOUT_US`](crate::constants::DEFAULT_BLOCKING_TIMEOUT_US)
    /// is a generous bound when the caller has no tighter one.
    pub fn write_word_blocking_timeout<T: DelayNs>(
        &self,
        word: u16,
        delay: &mut T,
        timeout_us: u32,
    ) -> TxResult<()> {
        self.ensure_initialized()?;
        self.begin_single_word(word);

        let mut elapsed = 0u32;
        while !self.spi.is_transfer_complete() {
            if elapsed >= timeout_us {
                return Err(TxError::Timeout);
            }
            delay.delay_us(1);
            elapsed += 1;
        }
        Ok(())
    }

    /// DMA completion interrupt entry point.
    ///
    /// Call this from the interrupt handler bound to the engine's DMA channel.
    /// Never blocks.
    pub fn on_dma_completion(&self) {
        self.dma.clear_complete();
        // Must be disabled before it can be reprogrammed
        self.dma.disarm();

        match self.state.get() {
            TxState::Running => {
                self.retire_session();
                self.pump();
            }
            // The arming context was preempted before issuing start; it
            // retires the burst itself once it reaches `Running`.
            TxState::Armed if self.descriptor_armed.load(Ordering::Acquire) => {
                self.completion_pending.store(true, Ordering::Release);
            }
            _state => {
                #[cfg(feature = "defmt")]
                defmt::warn!("SPI TX completion with no burst in flight ({})", _state);
                #[cfg(feature = "log")]
                log::warn!("SPI TX completion with no burst in flight ({_state:?})");
            }
        }
    }

    /// Arm bursts until the ring is drained, a burst is in flight, or the
    /// backlog is too short to send.
    fn pump(&self) {
        while let Ok(Some(_)) = self.arm_next() {
            if !self.completion_pending.swap(false, Ordering::AcqRel) {
                break;
            }
            self.retire_session();
        }
    }

    /// The chunker: arm the next contiguous burst if the hardware is free.
    ///
    /// Returns the committed session, `None` when there is nothing (or only
    /// a single word) to send, or [`TxError::HardwareBusy`] when a burst is
    /// already in flight.
    pub(crate) fn arm_next(&self) -> TxResult<Option<TransferSession>> {
        if self.dma.is_enabled() || !self.state.transition(TxState::Idle, TxState::Armed) {
            return Err(TxError::HardwareBusy);
        }

        let run = self.ring.contiguous_run();
        if run <= 1 {
            // A lone trailing word waits for more data
            if run == 1 {
                #[cfg(feature = "defmt")]
                defmt::debug!("SPI TX deferring single word");
                #[cfg(feature = "log")]
                log::debug!("SPI TX deferring single word");
            }
            self.completion_pending.store(false, Ordering::Release);
            self.state.transition(TxState::Armed, TxState::Idle);
            return Ok(None);
        }

        let tail = self.ring.tail();
        let session = TransferSession { words: run };
        self.session.commit(session);

        // TSIZE is only writable while the peripheral is disabled
        self.spi.disable();
        self.spi.clear_transfer_flags();

        // The first word goes out by hand; DMA moves the rest
        let descriptor = DmaDescriptor::new(
            self.ring.slot_addr(tail + 1),
            self.spi.tx_data_register(),
            (run - 1) as u16,
        );
        self.dma.arm(&descriptor);
        self.descriptor_armed.store(true, Ordering::Release);

        self.spi.set_transfer_size(run as u16);
        self.spi.enable();
        self.spi.push_word(self.ring.word_at(tail));
        self.spi.start();

        self.state.transition(TxState::Armed, TxState::Running);
        self.descriptor_armed.store(false, Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::trace!("SPI TX burst armed: tail={} words={}", tail, run);
        #[cfg(feature = "log")]
        log::trace!("SPI TX burst armed: tail={tail} words={run}");

        Ok(Some(session))
    }

    /// Retire the in-flight burst: `Running -> Retiring -> Idle`.
    fn retire_session(&self) {
        if !self.state.transition(TxState::Running, TxState::Retiring) {
            return;
        }
        if let Some(session) = self.session.take() {
            self.ring.retire(session.words);
        }
        self.state.transition(TxState::Retiring, TxState::Idle);
    }

    fn begin_single_word(&self, word: u16) {
        self.spi.disable();
        self.spi.clear_transfer_flags();
        self.spi.set_transfer_size(1);
        self.spi.enable();
        self.spi.push_word(word);
        self.spi.start();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;
    use std::vec::Vec;

    use super::*;
    use crate::internal::constants::DEFAULT_BLOCKING_TIMEOUT_US;
    use crate::test_utils::{MockDelay, MockDma, MockSpi, Op, mock_pair};

    type TestTx<const N: usize> = SpiTx<MockSpi, MockDma, N>;

    fn ready_tx<const N: usize>() -> TestTx<N> {
        let (spi, dma) = mock_pair();
        let tx = SpiTx::new(spi, dma);
        tx.init(&SpiTxConfig::new()).unwrap();
        tx.spi().clear_ops();
        tx
    }

    fn armed_descriptors<const N: usize>(tx: &TestTx<N>) -> Vec<DmaDescriptor> {
        tx.spi()
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::DmaArm(desc) => Some(desc),
                _ => None,
            })
            .collect()
    }

    fn words(range: core::ops::Range<u16>) -> Vec<u16> {
        range.collect()
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    #[test]
    fn init_configures_spi_then_dma() {
        let (spi, dma) = mock_pair();
        let tx: TestTx<16> = SpiTx::new(spi, dma);
        assert!(!tx.is_initialized());

        tx.init(&SpiTxConfig::new()).unwrap();

        let dest = tx.spi().tx_data_register();
        assert_eq!(
            tx.spi().ops(),
            vec![Op::SpiConfigure(SpiTxConfig::new()), Op::DmaConfigure(dest)]
        );
        assert!(tx.is_initialized());
        assert_eq!(tx.state(), TxState::Idle);
    }

    #[test]
    fn init_twice_fails() {
        let tx: TestTx<16> = ready_tx();
        assert_eq!(
            tx.init(&SpiTxConfig::new()),
            Err(ConfigError::AlreadyInitialized)
        );
    }

    #[test]
    fn init_rejects_invalid_config_without_touching_hardware() {
        let (spi, dma) = mock_pair();
        let tx: TestTx<16> = SpiTx::new(spi, dma);
        let config = SpiTxConfig::new().with_mid_frame_idle(0);

        assert_eq!(tx.init(&config), Err(ConfigError::InvalidConfig));
        assert!(tx.spi().ops().is_empty());
        assert!(!tx.is_initialized());
    }

    #[test]
    fn write_before_init_fails() {
        let (spi, dma) = mock_pair();
        let tx: TestTx<16> = SpiTx::new(spi, dma);
        assert_eq!(tx.write(&[1, 2]), Err(TxError::NotInitialized));
        assert_eq!(tx.write_word_blocking(1), Err(TxError::NotInitialized));
        assert_eq!(tx.occupancy(), 0);
    }

    // =========================================================================
    // Arming
    // =========================================================================

    #[test]
    fn arming_follows_hardware_order() {
        let tx: TestTx<16> = ready_tx();
        tx.write(&[0xA1, 0xA2, 0xA3]).unwrap();

        let expected = DmaDescriptor::new(
            tx.ring.slot_addr(1),
            tx.spi().tx_data_register(),
            2,
        );
        assert_eq!(
            tx.spi().ops(),
            vec![
                Op::DmaIsEnabled,
                Op::SpiDisable,
                Op::SpiClearFlags,
                Op::DmaArm(expected),
                Op::SpiTransferSize(3),
                Op::SpiEnable,
                Op::SpiPush(0xA1),
                Op::SpiStart,
            ]
        );
        assert_eq!(tx.state(), TxState::Running);
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 3 }));
    }

    #[test]
    fn capacity_scenario_255_245_255() {
        let tx: TestTx<256> = ready_tx();
        assert_eq!(tx.capacity(), 255);
        assert_eq!(tx.available(), 255);

        tx.write(&words(0..10)).unwrap();
        assert_eq!(tx.available(), 245);
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 10 }));

        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.available(), 255);
        assert_eq!(tx.state(), TxState::Idle);
        assert_eq!(tx.pending_session(), None);
    }

    #[test]
    fn wraparound_splits_into_two_bursts() {
        let tx: TestTx<256> = ready_tx();

        // Move tail to offset 200
        tx.write(&words(0..200)).unwrap();
        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.ring.tail(), 200);
        tx.spi().clear_ops();

        tx.write(&words(1000..1060)).unwrap();
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 56 }));

        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 4 }));
        assert_eq!(tx.state(), TxState::Running);

        let bursts = armed_descriptors(&tx);
        assert_eq!(bursts.len(), 2);
        assert_eq!(bursts[0].source, tx.ring.slot_addr(201));
        assert_eq!(bursts[0].words, 55);
        assert_eq!(bursts[1].source, tx.ring.slot_addr(1));
        assert_eq!(bursts[1].words, 3);

        let pushed: Vec<u16> = tx
            .spi()
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::SpiPush(w) => Some(w),
                _ => None,
            })
            .collect();
        assert_eq!(pushed, vec![1000, 1056]);

        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.occupancy(), 0);
        assert!(tx.is_idle());
    }

    #[test]
    fn write_while_running_queues_without_new_burst() {
        let tx: TestTx<64> = ready_tx();
        tx.write(&words(0..5)).unwrap();
        tx.write(&words(5..12)).unwrap();

        assert_eq!(armed_descriptors(&tx).len(), 1);
        assert_eq!(tx.occupancy(), 12);
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 5 }));

        // The second write's data goes out after the first completion
        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.occupancy(), 7);
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 7 }));
        assert_eq!(armed_descriptors(&tx).len(), 2);
    }

    #[test]
    fn completion_retires_committed_count_only() {
        let tx: TestTx<64> = ready_tx();
        tx.write(&words(0..4)).unwrap();
        tx.write(&words(4..20)).unwrap();
        tx.write(&words(20..30)).unwrap();

        tx.dma().finish();
        tx.on_dma_completion();
        // Exactly the 4 words of the first burst were retired
        assert_eq!(tx.occupancy(), 26);
        assert_eq!(tx.ring.tail(), 4);
    }

    #[test]
    fn burst_length_never_crosses_end_of_store() {
        let tx: TestTx<8> = ready_tx();
        tx.write(&words(0..5)).unwrap();
        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.ring.tail(), 5);

        tx.write(&words(10..16)).unwrap();
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 3 }));
        assert_eq!(tx.available() + tx.occupancy(), 7);

        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.ring.tail(), 0);
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 3 }));
    }

    #[test]
    fn lone_word_at_end_of_store_is_deferred() {
        let tx: TestTx<8> = ready_tx();
        tx.write(&words(0..7)).unwrap();
        tx.dma().finish();
        tx.on_dma_completion();
        assert_eq!(tx.ring.tail(), 7);

        // Only one slot remains before the wrap, so the run is capped at one
        tx.write(&words(20..23)).unwrap();
        assert_eq!(armed_descriptors(&tx).len(), 1);
        assert_eq!(tx.occupancy(), 3);
        assert!(tx.is_idle());
    }

    #[test]
    fn single_word_is_deferred_until_more_data() {
        let tx: TestTx<16> = ready_tx();
        tx.write(&[0x55]).unwrap();

        assert!(armed_descriptors(&tx).is_empty());
        assert_eq!(tx.state(), TxState::Idle);
        assert_eq!(tx.occupancy(), 1);

        tx.write(&[0x66]).unwrap();
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 2 }));
    }

    #[test]
    fn chunker_reports_busy_while_running() {
        let tx: TestTx<16> = ready_tx();
        tx.write(&[1, 2, 3]).unwrap();
        assert_eq!(tx.arm_next(), Err(TxError::HardwareBusy));
    }

    #[test]
    fn chunker_respects_hardware_busy_flag() {
        let tx: TestTx<16> = ready_tx();
        tx.dma().force_enabled(true);
        tx.write(&[1, 2, 3]).unwrap();

        assert!(armed_descriptors(&tx).is_empty());
        assert!(tx.is_idle());
    }

    // =========================================================================
    // Buffer Full
    // =========================================================================

    #[test]
    fn oversized_write_is_dropped_untouched() {
        let tx: TestTx<16> = ready_tx();
        tx.write(&words(0..10)).unwrap();
        let head = tx.ring.head();
        let tail = tx.ring.tail();
        let ops_before = tx.spi().ops().len();

        assert_eq!(tx.write(&words(0..6)), Err(TxError::BufferFull));
        assert_eq!(tx.ring.head(), head);
        assert_eq!(tx.ring.tail(), tail);
        assert_eq!(tx.available(), 5);
        assert_eq!(tx.spi().ops().len(), ops_before);
    }

    #[test]
    fn empty_write_is_accepted_and_idle() {
        let tx: TestTx<16> = ready_tx();
        assert_eq!(tx.write(&[]), Ok(()));
        assert!(tx.spi().ops().is_empty());
    }

    // =========================================================================
    // Completion Handling
    // =========================================================================

    #[test]
    fn completion_clears_flag_then_disables_channel() {
        let tx: TestTx<16> = ready_tx();
        tx.write(&[1, 2]).unwrap();
        tx.spi().clear_ops();

        tx.dma().finish();
        tx.on_dma_completion();

        let ops = tx.spi().ops();
        assert_eq!(&ops[..2], &[Op::DmaClearComplete, Op::DmaDisarm]);
    }

    #[test]
    fn spurious_completion_is_ignored() {
        let tx: TestTx<16> = ready_tx();
        tx.on_dma_completion();
        assert!(tx.is_idle());
        assert_eq!(tx.occupancy(), 0);
        assert_eq!(tx.spi().ops(), vec![Op::DmaClearComplete, Op::DmaDisarm]);
    }

    #[test]
    fn completion_while_armed_is_left_to_arming_context() {
        let tx: TestTx<16> = ready_tx();
        tx.ring.enqueue(&[1, 2, 3]).unwrap();
        assert!(tx.state.transition(TxState::Idle, TxState::Armed));
        tx.session.commit(TransferSession { words: 3 });
        tx.descriptor_armed.store(true, Ordering::Release);

        tx.on_dma_completion();

        assert_eq!(tx.state(), TxState::Armed);
        assert_eq!(tx.occupancy(), 3);
        assert!(tx.completion_pending.load(Ordering::Acquire));
    }

    #[test]
    fn completion_before_descriptor_is_armed_is_spurious() {
        let tx: TestTx<16> = ready_tx();
        tx.ring.enqueue(&[1, 2, 3]).unwrap();
        assert!(tx.state.transition(TxState::Idle, TxState::Armed));

        tx.on_dma_completion();

        assert_eq!(tx.state(), TxState::Armed);
        assert!(!tx.completion_pending.load(Ordering::Acquire));
    }

    #[test]
    fn completion_during_deferred_claim_does_not_retire_next_burst() {
        let tx: TestTx<16> = ready_tx();
        tx.write(&[0x11]).unwrap();
        assert!(tx.is_idle());

        // Interrupt lands while the chunker holds `Armed` for a lone word
        assert!(tx.state.transition(TxState::Idle, TxState::Armed));
        tx.on_dma_completion();
        assert!(tx.state.transition(TxState::Armed, TxState::Idle));

        tx.write(&[0x22, 0x33]).unwrap();

        assert_eq!(tx.state(), TxState::Running);
        assert_eq!(tx.pending_session(), Some(TransferSession { words: 3 }));
        assert_eq!(tx.occupancy(), 3);
        assert!(tx.dma().is_enabled());
        assert!(!tx.completion_pending.load(Ordering::Acquire));
    }

    #[test]
    fn deferral_discards_stale_pending_completion() {
        let tx: TestTx<16> = ready_tx();
        tx.completion_pending.store(true, Ordering::Release);

        tx.write(&[0x11]).unwrap();

        assert!(tx.is_idle());
        assert!(!tx.completion_pending.load(Ordering::Acquire));
    }

    #[test]
    fn pump_retires_burst_completed_during_arming() {
        let tx: TestTx<16> = ready_tx();
        tx.completion_pending.store(true, Ordering::Release);

        tx.write(&[1, 2, 3]).unwrap();

        // First burst retired by the arming context; nothing left to send
        assert_eq!(tx.occupancy(), 0);
        assert!(tx.is_idle());
        assert!(!tx.completion_pending.load(Ordering::Acquire));
    }

    // =========================================================================
    // Blocking Path
    // =========================================================================

    #[test]
    fn blocking_word_programs_single_frame() {
        let tx: TestTx<16> = ready_tx();
        tx.spi().complete_after_polls(3);

        tx.write_word_blocking(0x1234).unwrap();

        assert_eq!(
            tx.spi().ops(),
            vec![
                Op::SpiDisable,
                Op::SpiClearFlags,
                Op::SpiTransferSize(1),
                Op::SpiEnable,
                Op::SpiPush(0x1234),
                Op::SpiStart,
            ]
        );
        assert_eq!(tx.spi().polls(), 4);
        assert_eq!(tx.occupancy(), 0);
    }

    #[test]
    fn blocking_word_with_timeout_succeeds() {
        let tx: TestTx<16> = ready_tx();
        let mut delay = MockDelay::new();
        tx.spi().complete_after_polls(5);

        assert_eq!(
            tx.write_word_blocking_timeout(0x0042, &mut delay, DEFAULT_BLOCKING_TIMEOUT_US),
            Ok(())
        );
        assert_eq!(delay.total_ns(), 5_000);
    }

    #[test]
    fn blocking_word_with_timeout_expires() {
        let tx: TestTx<16> = ready_tx();
        let mut delay = MockDelay::new();
        tx.spi().complete_after_polls(u32::MAX);

        assert_eq!(
            tx.write_word_blocking_timeout(0x0042, &mut delay, 10),
            Err(TxError::Timeout)
        );
        assert_eq!(delay.total_ns(), 10_000);
    }
}
