//! SPI peripheral HAL
//!
//! The transmit engine drives the peripheral only through [`SpiPeripheral`].
//! [`Spi`] implements it over the STM32H5 SPI register block.

use crate::driver::config::SpiTxConfig;

// =============================================================================
// SPI Peripheral Trait
// =============================================================================

/// Capabilities the transmit engine needs from a synchronous serial peripheral.
///
/// Methods take `&self` because they run from both the foreground and the
/// completion interrupt. Implementations backed by memory-mapped registers
/// need no interior state; test doubles use interior mutability.
///
/// The transfer size is only writable while the peripheral is disabled.
pub trait SpiPeripheral {
    /// One-time frame and timing setup. Leaves the peripheral disabled.
    fn configure(&self, config: &SpiTxConfig);

    /// Bus address of the transmit data register (the DMA destination)
    fn tx_data_register(&self) -> usize;

    /// Enable the peripheral
    fn enable(&self);

    /// Disable the peripheral
    fn disable(&self);

    /// Clear the end-of-transfer and transfer-filled flags
    fn clear_transfer_flags(&self);

    /// Number of frames in the next transfer
    fn set_transfer_size(&self, frames: u16);

    /// Write one frame directly to the data register
    fn push_word(&self, word: u16);

    /// Start clocking out frames
    fn start(&self);

    /// Whether the last started transfer has fully shifted out
    fn is_transfer_complete(&self) -> bool;
}

// =============================================================================
// STM32H5 SPI
// =============================================================================

#[cfg(feature = "stm32h5")]
pub use self::stm32h5::Spi;

#[cfg(feature = "stm32h5")]
mod stm32h5 {
    use super::SpiPeripheral;
    use crate::driver::config::SpiTxConfig;
    use crate::internal::constants::FRAME_BITS;
    use crate::internal::register::SPI5_BASE;
    use crate::internal::register::spi::{
        CFG1_DSIZE_MASK, CFG1_MBR_MASK, CFG1_MBR_SHIFT, CFG1_TXDMAEN, CFG2_CPHA, CFG2_CPOL,
        CFG2_LSBFRST, CFG2_MASTER, CFG2_MIDI_MASK, CFG2_MIDI_SHIFT, CFG2_MSSI_MASK, CFG2_SSOE,
        CFG2_SSOM, CR2_TSIZE_MASK, IFCR_EOTC, IFCR_TXTFC, SpiRegs,
    };

    /// SPI controller driven through its register block
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Spi {
        regs: SpiRegs,
    }

    impl Spi {
        /// SPI controller at `base`
        pub const fn new(base: usize) -> Self {
            Self {
                regs: SpiRegs::new(base),
            }
        }

        /// SPI5, the instance wired to the gate driver on the reference board
        pub const fn spi5() -> Self {
            Self::new(SPI5_BASE)
        }

        /// CFG1 value for the given configuration, preserving unrelated bits
        pub(crate) const fn cfg1_value(current: u32, config: &SpiTxConfig) -> u32 {
            let mut cfg1 = current & !(CFG1_DSIZE_MASK | CFG1_MBR_MASK);
            cfg1 |= (FRAME_BITS as u32 - 1) & CFG1_DSIZE_MASK;
            cfg1 |= (config.baud_divider.to_reg_value() << CFG1_MBR_SHIFT) & CFG1_MBR_MASK;
            cfg1 | CFG1_TXDMAEN
        }

        /// CFG2 value for the given configuration, preserving unrelated bits
        pub(crate) const fn cfg2_value(current: u32, config: &SpiTxConfig) -> u32 {
            let mut cfg2 =
                current & !(CFG2_MSSI_MASK | CFG2_MIDI_MASK | CFG2_CPOL | CFG2_LSBFRST);
            cfg2 |= config.ss_setup_idle as u32 & CFG2_MSSI_MASK;
            cfg2 |= ((config.mid_frame_idle as u32) << CFG2_MIDI_SHIFT) & CFG2_MIDI_MASK;
            cfg2 | CFG2_CPHA | CFG2_MASTER | CFG2_SSOE | CFG2_SSOM
        }
    }

    impl SpiPeripheral for Spi {
        fn configure(&self, config: &SpiTxConfig) {
            // Configuration registers are write-protected while SPE is set
            self.regs.disable();
            self.regs.set_cfg1(Self::cfg1_value(self.regs.cfg1(), config));
            self.regs.set_cfg2(Self::cfg2_value(self.regs.cfg2(), config));
            self.regs.set_cr2(1);
        }

        fn tx_data_register(&self) -> usize {
            self.regs.txdr_addr()
        }

        fn enable(&self) {
            self.regs.enable();
        }

        fn disable(&self) {
            self.regs.disable();
        }

        fn clear_transfer_flags(&self) {
            self.regs.set_ifcr(IFCR_TXTFC | IFCR_EOTC);
        }

        fn set_transfer_size(&self, frames: u16) {
            let cr2 = self.regs.cr2() & !CR2_TSIZE_MASK;
            self.regs.set_cr2(cr2 | frames as u32);
        }

        fn push_word(&self, word: u16) {
            self.regs.write_txdr(word);
        }

        fn start(&self) {
            self.regs.start();
        }

        fn is_transfer_complete(&self) -> bool {
            self.regs.is_end_of_transfer()
        }
    }
}
