//! Testing utilities and mock implementations
//!
//! Mock peripheral and DMA channel for exercising the transmit engine on the
//! host. Both mocks append to one shared operation log so tests can assert
//! the exact interleaving of SPI and DMA accesses.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use crate::driver::config::SpiTxConfig;
use crate::hal::dma::{DmaChannel, DmaDescriptor};
use crate::hal::spi::SpiPeripheral;

/// TXDR address reported by [`MockSpi`]
pub const MOCK_TXDR: usize = 0x4001_5020;

/// One recorded hardware access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    SpiConfigure(SpiTxConfig),
    SpiEnable,
    SpiDisable,
    SpiClearFlags,
    SpiTransferSize(u16),
    SpiPush(u16),
    SpiStart,
    DmaConfigure(usize),
    DmaArm(DmaDescriptor),
    DmaDisarm,
    DmaIsEnabled,
    DmaClearComplete,
}

type OpLog = Rc<RefCell<Vec<Op>>>;

/// Build a SPI/DMA mock pair sharing one operation log
pub fn mock_pair() -> (MockSpi, MockDma) {
    let log = OpLog::default();
    (MockSpi::new(Rc::clone(&log)), MockDma::new(log))
}

// =============================================================================
// Mock SPI
// =============================================================================

/// Mock SPI peripheral
///
/// `is_transfer_complete` reports false for a configurable number of polls
/// and true afterwards.
#[derive(Debug)]
pub struct MockSpi {
    log: OpLog,
    polls: Cell<u32>,
    complete_after: Cell<u32>,
}

impl MockSpi {
    fn new(log: OpLog) -> Self {
        Self {
            log,
            polls: Cell::new(0),
            complete_after: Cell::new(0),
        }
    }

    fn record(&self, op: Op) {
        self.log.borrow_mut().push(op);
    }

    /// Every recorded SPI and DMA access, in order
    pub fn ops(&self) -> Vec<Op> {
        self.log.borrow().clone()
    }

    /// Clear the operation log
    pub fn clear_ops(&self) {
        self.log.borrow_mut().clear();
    }

    /// Report completion only after `polls` unsuccessful polls
    pub fn complete_after_polls(&self, polls: u32) {
        self.polls.set(0);
        self.complete_after.set(polls);
    }

    /// Number of completion polls since the last reset
    pub fn polls(&self) -> u32 {
        self.polls.get()
    }
}

impl SpiPeripheral for MockSpi {
    fn configure(&self, config: &SpiTxConfig) {
        self.record(Op::SpiConfigure(*config));
    }

    fn tx_data_register(&self) -> usize {
        MOCK_TXDR
    }

    fn enable(&self) {
        self.record(Op::SpiEnable);
    }

    fn disable(&self) {
        self.record(Op::SpiDisable);
    }

    fn clear_transfer_flags(&self) {
        self.record(Op::SpiClearFlags);
    }

    fn set_transfer_size(&self, frames: u16) {
        self.record(Op::SpiTransferSize(frames));
    }

    fn push_word(&self, word: u16) {
        self.record(Op::SpiPush(word));
    }

    fn start(&self) {
        self.record(Op::SpiStart);
    }

    fn is_transfer_complete(&self) -> bool {
        let polls = self.polls.get().saturating_add(1);
        self.polls.set(polls);
        polls > self.complete_after.get()
    }
}

// =============================================================================
// Mock DMA Channel
// =============================================================================

/// Mock DMA channel
///
/// Tracks the enable bit the way the hardware does: set by `arm`, cleared by
/// `disarm` or when the burst finishes.
#[derive(Debug)]
pub struct MockDma {
    log: OpLog,
    enabled: Cell<bool>,
}

impl MockDma {
    fn new(log: OpLog) -> Self {
        Self {
            log,
            enabled: Cell::new(false),
        }
    }

    fn record(&self, op: Op) {
        self.log.borrow_mut().push(op);
    }

    /// Simulate the burst running to completion (hardware clears EN)
    pub fn finish(&self) {
        self.enabled.set(false);
    }

    /// Override the enable bit
    pub fn force_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

impl DmaChannel for MockDma {
    fn configure(&self, destination: usize) {
        self.record(Op::DmaConfigure(destination));
    }

    fn arm(&self, descriptor: &DmaDescriptor) {
        self.record(Op::DmaArm(*descriptor));
        if descriptor.enable {
            self.enabled.set(true);
        }
    }

    fn disarm(&self) {
        self.record(Op::DmaDisarm);
        self.enabled.set(false);
    }

    fn is_enabled(&self) -> bool {
        self.record(Op::DmaIsEnabled);
        self.enabled.get()
    }

    fn clear_complete(&self) {
        self.record(Op::DmaClearComplete);
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;

    #[test]
    fn mocks_share_one_log() {
        let (spi, dma) = mock_pair();
        spi.enable();
        dma.disarm();
        spi.push_word(7);
        assert_eq!(spi.ops(), [Op::SpiEnable, Op::DmaDisarm, Op::SpiPush(7)]);
    }

    #[test]
    fn mock_dma_tracks_enable_bit() {
        let (_spi, dma) = mock_pair();
        assert!(!dma.is_enabled());
        dma.arm(&DmaDescriptor::new(0x100, MOCK_TXDR, 4));
        assert!(dma.is_enabled());
        dma.finish();
        assert!(!dma.is_enabled());
    }

    #[test]
    fn mock_delay_accumulates() {
        let mut delay = MockDelay::new();
        delay.delay_us(3);
        delay.delay_ns(500);
        assert_eq!(delay.total_ns(), 3_500);
    }
}
