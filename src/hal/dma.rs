//! DMA channel HAL
//!
//! The transmit engine programs bursts only through [`DmaChannel`], handing it
//! a fully built [`DmaDescriptor`] each time. [`GpdmaChannel`] implements it
//! over one STM32H5 GPDMA channel.

use crate::internal::constants::WORD_BYTES;

// =============================================================================
// DMA Descriptor
// =============================================================================

/// One memory-to-peripheral burst.
///
/// Rebuilt in full before every burst; the channel must be disabled while it
/// is programmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DmaDescriptor {
    /// Address of the first word to move
    pub source: usize,
    /// Peripheral data register (fixed, no increment)
    pub destination: usize,
    /// Burst length in 16-bit words
    pub words: u16,
    /// Enable the channel once programmed
    pub enable: bool,
}

impl DmaDescriptor {
    /// Descriptor for `words` words from `source` to `destination`, enabled
    #[must_use]
    pub const fn new(source: usize, destination: usize, words: u16) -> Self {
        Self {
            source,
            destination,
            words,
            enable: true,
        }
    }

    /// Burst length in bytes
    #[must_use]
    pub const fn bytes(&self) -> u32 {
        self.words as u32 * WORD_BYTES as u32
    }
}

// =============================================================================
// DMA Channel Trait
// =============================================================================

/// Capabilities the transmit engine needs from a DMA channel.
///
/// The channel must be disabled before it is reprogrammed, and its completion
/// flag must be cleared explicitly.
pub trait DmaChannel {
    /// One-time setup: 16-bit source/destination, source increment, fixed
    /// destination at `destination`, completion interrupt enabled.
    fn configure(&self, destination: usize);

    /// Program source, destination and length, then enable if requested
    fn arm(&self, descriptor: &DmaDescriptor);

    /// Disable the channel
    fn disarm(&self);

    /// Whether the channel is enabled (a burst is in flight)
    fn is_enabled(&self) -> bool;

    /// Acknowledge the completion event
    fn clear_complete(&self);
}

// =============================================================================
// STM32H5 GPDMA Channel
// =============================================================================

#[cfg(feature = "stm32h5")]
pub use self::stm32h5::GpdmaChannel;

#[cfg(feature = "stm32h5")]
mod stm32h5 {
    use super::{DmaChannel, DmaDescriptor};
    use crate::internal::register::gpdma::{
        CBR1_BNDT_MASK, CCR_TCIE, CFCR_TCF, CTR1_DDW_LOG2_SHIFT, CTR1_SDW_LOG2_SHIFT, CTR1_SINC,
        CTR2_DREQ, CTR2_REQSEL_MASK, DATA_WIDTH_HALF_WORD, GpdmaChannelRegs,
    };

    /// One GPDMA channel feeding a peripheral
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GpdmaChannel {
        regs: GpdmaChannelRegs,
        request: u8,
    }

    impl GpdmaChannel {
        /// Channel `channel` of the GPDMA instance at `instance_base`, paced
        /// by hardware request line `request` (see the reference manual's
        /// GPDMA request table for the peripheral's TX line).
        pub const fn new(instance_base: usize, channel: u8, request: u8) -> Self {
            Self {
                regs: GpdmaChannelRegs::new(instance_base, channel),
                request,
            }
        }

        /// CTR1 value: half-word widths, incrementing source, fixed destination
        pub(crate) const fn ctr1_value() -> u32 {
            (DATA_WIDTH_HALF_WORD << CTR1_SDW_LOG2_SHIFT)
                | (DATA_WIDTH_HALF_WORD << CTR1_DDW_LOG2_SHIFT)
                | CTR1_SINC
        }

        /// CTR2 value: request line, destination-driven
        pub(crate) const fn ctr2_value(request: u8) -> u32 {
            (request as u32 & CTR2_REQSEL_MASK) | CTR2_DREQ
        }
    }

    impl DmaChannel for GpdmaChannel {
        fn configure(&self, destination: usize) {
            self.regs.disable();
            self.regs.set_ctr1(Self::ctr1_value());
            self.regs.set_ctr2(Self::ctr2_value(self.request));
            self.regs.set_cdar(destination as u32);
            self.regs.set_ccr(CCR_TCIE);
        }

        fn arm(&self, descriptor: &DmaDescriptor) {
            self.regs.set_csar(descriptor.source as u32);
            self.regs.set_cdar(descriptor.destination as u32);
            // Block size is counted in bytes
            self.regs.set_cbr1(descriptor.bytes() & CBR1_BNDT_MASK);
            if descriptor.enable {
                self.regs.enable();
            }
        }

        fn disarm(&self) {
            self.regs.disable();
        }

        fn is_enabled(&self) -> bool {
            self.regs.is_enabled()
        }

        fn clear_complete(&self) {
            self.regs.set_cfcr(CFCR_TCF);
        }
    }
}
