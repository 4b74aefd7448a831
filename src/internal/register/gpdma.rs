//! GPDMA channel register block
//!
//! Each GPDMA instance has 8 channels; channel `n` starts at
//! `instance + 0x50 + 0x80 * n`.

use super::{reg_bit_check, reg_bit_ops, reg_rw};

// =============================================================================
// Channel Layout
// =============================================================================

/// Offset of channel 0 from the instance base
pub const CHANNEL0_OFFSET: usize = 0x50;
/// Stride between channel blocks
pub const CHANNEL_STRIDE: usize = 0x80;
/// Channels per GPDMA instance
pub const CHANNEL_COUNT: u8 = 8;

// =============================================================================
// Register Offsets (relative to the channel block)
// =============================================================================

/// Flag clear register
pub const CFCR_OFFSET: usize = 0x0C;
/// Control register
pub const CCR_OFFSET: usize = 0x14;
/// Transfer register 1
pub const CTR1_OFFSET: usize = 0x40;
/// Transfer register 2
pub const CTR2_OFFSET: usize = 0x44;
/// Block register 1
pub const CBR1_OFFSET: usize = 0x48;
/// Source address register
pub const CSAR_OFFSET: usize = 0x4C;
/// Destination address register
pub const CDAR_OFFSET: usize = 0x50;

// =============================================================================
// Bits
// =============================================================================

/// Channel enable
pub const CCR_EN: u32 = 1 << 0;
/// Transfer complete interrupt enable
pub const CCR_TCIE: u32 = 1 << 8;
/// Transfer complete flag clear
pub const CFCR_TCF: u32 = 1 << 8;

/// Source data width field shift (log2 bytes)
pub const CTR1_SDW_LOG2_SHIFT: u32 = 0;
/// Source incrementing burst
pub const CTR1_SINC: u32 = 1 << 3;
/// Destination data width field shift (log2 bytes)
pub const CTR1_DDW_LOG2_SHIFT: u32 = 16;
/// Half-word width encoding for SDW/DDW
pub const DATA_WIDTH_HALF_WORD: u32 = 0b01;

/// Hardware request selection mask
pub const CTR2_REQSEL_MASK: u32 = 0x7F;
/// Request is driven by the destination peripheral
pub const CTR2_DREQ: u32 = 1 << 10;

/// Block size in bytes
pub const CBR1_BNDT_MASK: u32 = 0xFFFF;

// =============================================================================
// Register Block
// =============================================================================

/// One GPDMA channel's register block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpdmaChannelRegs {
    base: usize,
}

impl GpdmaChannelRegs {
    /// Channel `channel` of the GPDMA instance at `instance_base`
    pub const fn new(instance_base: usize, channel: u8) -> Self {
        debug_assert!(channel < CHANNEL_COUNT, "GPDMA channel out of range");
        Self {
            base: instance_base + CHANNEL0_OFFSET + CHANNEL_STRIDE * channel as usize,
        }
    }

    /// Base address of the channel block
    pub const fn base(&self) -> usize {
        self.base
    }

    reg_rw!(ccr, set_ccr, CCR_OFFSET, "Channel control register");
    reg_rw!(ctr1, set_ctr1, CTR1_OFFSET, "Channel transfer register 1");
    reg_rw!(ctr2, set_ctr2, CTR2_OFFSET, "Channel transfer register 2");
    reg_rw!(cbr1, set_cbr1, CBR1_OFFSET, "Channel block register 1");
    reg_rw!(csar, set_csar, CSAR_OFFSET, "Channel source address");
    reg_rw!(cdar, set_cdar, CDAR_OFFSET, "Channel destination address");
    reg_rw!(cfcr, set_cfcr, CFCR_OFFSET, "Channel flag clear register");

    reg_bit_ops!(enable, disable, CCR_OFFSET, CCR_EN, "DMA channel", "Enable", "Disable");
    reg_bit_check!(is_enabled, CCR_OFFSET, CCR_EN, "Check if the channel is enabled");
}
