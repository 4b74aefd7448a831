//! SPI (v2 IP) register block
//!
//! Offsets and bit positions for the STM32H5 SPI controller. Only the fields
//! the transmit engine touches are defined.

use super::{reg_bit_check, reg_bit_ops, reg_ro, reg_rw};

// =============================================================================
// Register Offsets
// =============================================================================

/// Control register 1
pub const CR1_OFFSET: usize = 0x00;
/// Control register 2 (TSIZE)
pub const CR2_OFFSET: usize = 0x04;
/// Configuration register 1
pub const CFG1_OFFSET: usize = 0x08;
/// Configuration register 2
pub const CFG2_OFFSET: usize = 0x0C;
/// Status register
pub const SR_OFFSET: usize = 0x14;
/// Interrupt/status flags clear register
pub const IFCR_OFFSET: usize = 0x18;
/// Transmit data register
pub const TXDR_OFFSET: usize = 0x20;

// =============================================================================
// CR1 Bits
// =============================================================================

/// Serial peripheral enable
pub const CR1_SPE: u32 = 1 << 0;
/// Master transfer start
pub const CR1_CSTART: u32 = 1 << 9;

// =============================================================================
// CR2 Fields
// =============================================================================

/// Number of data frames in the transfer
pub const CR2_TSIZE_MASK: u32 = 0xFFFF;

// =============================================================================
// CFG1 Fields
// =============================================================================

/// Frame width minus one
pub const CFG1_DSIZE_MASK: u32 = 0x1F;
/// Tx DMA stream enable
pub const CFG1_TXDMAEN: u32 = 1 << 15;
/// Master baud rate divider shift
pub const CFG1_MBR_SHIFT: u32 = 28;
/// Master baud rate divider mask
pub const CFG1_MBR_MASK: u32 = 0x7 << CFG1_MBR_SHIFT;

// =============================================================================
// CFG2 Fields
// =============================================================================

/// SS to first SCK edge delay mask (bits 3:0)
pub const CFG2_MSSI_MASK: u32 = 0xF;
/// Master inter-data idleness shift
pub const CFG2_MIDI_SHIFT: u32 = 4;
/// Master inter-data idleness mask (bits 7:4)
pub const CFG2_MIDI_MASK: u32 = 0xF << CFG2_MIDI_SHIFT;
/// Master mode
pub const CFG2_MASTER: u32 = 1 << 22;
/// LSB first
pub const CFG2_LSBFRST: u32 = 1 << 23;
/// Clock phase (second edge captures)
pub const CFG2_CPHA: u32 = 1 << 24;
/// Clock polarity (idle high)
pub const CFG2_CPOL: u32 = 1 << 25;
/// SS output enable
pub const CFG2_SSOE: u32 = 1 << 29;
/// SS pulsed inactive between frames
pub const CFG2_SSOM: u32 = 1 << 30;

// =============================================================================
// SR / IFCR Bits
// =============================================================================

/// End of transfer
pub const SR_EOT: u32 = 1 << 3;
/// End of transfer flag clear
pub const IFCR_EOTC: u32 = 1 << 3;
/// Transmission transfer filled flag clear
pub const IFCR_TXTFC: u32 = 1 << 4;

// =============================================================================
// Register Block
// =============================================================================

/// SPI register block at a fixed base address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiRegs {
    base: usize,
}

impl SpiRegs {
    /// Register block at `base`
    pub const fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the block
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Address of TXDR (DMA destination)
    pub const fn txdr_addr(&self) -> usize {
        self.base + TXDR_OFFSET
    }

    reg_rw!(cr2, set_cr2, CR2_OFFSET, "Control register 2");
    reg_rw!(cfg1, set_cfg1, CFG1_OFFSET, "Configuration register 1");
    reg_rw!(cfg2, set_cfg2, CFG2_OFFSET, "Configuration register 2");
    reg_ro!(sr, SR_OFFSET, "Status register");
    reg_rw!(ifcr, set_ifcr, IFCR_OFFSET, "Flag clear register");

    reg_bit_ops!(enable, disable, CR1_OFFSET, CR1_SPE, "SPI", "Enable", "Disable");
    reg_bit_check!(is_enabled, CR1_OFFSET, CR1_SPE, "Check if SPI is enabled");
    reg_bit_check!(is_end_of_transfer, SR_OFFSET, SR_EOT, "Check the end-of-transfer flag");

    /// Set CSTART to begin clocking out frames
    #[inline(always)]
    pub fn start(&self) {
        unsafe { super::set_bits(self.base + CR1_OFFSET, CR1_CSTART) }
    }

    /// Write one 16-bit frame to TXDR
    #[inline(always)]
    pub fn write_txdr(&self, word: u16) {
        unsafe { super::write_reg16(self.txdr_addr(), word) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_masks_do_not_overlap() {
        assert_eq!(CFG2_MSSI_MASK & CFG2_MIDI_MASK, 0);
        assert_eq!(CFG1_DSIZE_MASK & CFG1_MBR_MASK, 0);
        assert_eq!(CFG1_TXDMAEN & (CFG1_MBR_MASK | CFG1_DSIZE_MASK), 0);
    }

    #[test]
    fn txdr_addr_offsets_from_base() {
        let regs = SpiRegs::new(0x4001_5000);
        assert_eq!(regs.base(), 0x4001_5000);
        assert_eq!(regs.txdr_addr(), 0x4001_5020);
    }
}
