//! Centralized Constants
//!
//! Single source of truth for the framing, timing and sizing numbers used by
//! the transmit engine.
//!
//! Hardware register bit definitions remain in their respective modules
//! (`register/spi.rs`, `register/gpdma.rs`).

// =============================================================================
// Frame Format (fixed by the slave device)
// =============================================================================

/// Bits per frame. The slave discards anything shorter or longer.
pub const FRAME_BITS: u8 = 16;

/// Width of the command field at the top of an outbound frame
pub const COMMAND_BITS: u8 = 5;

/// Width of the data field at the bottom of a frame
pub const DATA_BITS: u8 = 11;

/// Mask for the 11-bit data field
pub const DATA_MASK: u16 = (1 << DATA_BITS) - 1;

// =============================================================================
// Timing
// =============================================================================

/// Minimum time nSCS must stay high between words
pub const MIN_DESELECT_NS: u32 = 400;

/// Default inter-frame idle (MIDI) in SCK cycles
pub const DEFAULT_MID_FRAME_IDLE: u8 = 15;

/// Default delay between SS assertion and the first SCK edge (MSSI) in SCK cycles
pub const DEFAULT_SS_SETUP_IDLE: u8 = 15;

/// Largest value the MIDI and MSSI fields can hold
pub const MAX_IDLE_CYCLES: u8 = 15;

/// Smallest MIDI value for which hardware pulses SS between frames
pub const MIN_PULSED_MID_FRAME_IDLE: u8 = 2;

/// Default SPI kernel clock used for deselect validation (250 MHz)
pub const DEFAULT_KERNEL_CLOCK_HZ: u32 = 250_000_000;

/// Default blocking-write timeout in microseconds
pub const DEFAULT_BLOCKING_TIMEOUT_US: u32 = 1_000;

// =============================================================================
// Ring Sizing
// =============================================================================

/// Largest supported ring, in slots
pub const MAX_RING_SLOTS: usize = 256;

/// Smallest ring that can hold a word (one slot is always reserved)
pub const MIN_RING_SLOTS: usize = 2;

/// Default ring size
pub const DEFAULT_RING_SLOTS: usize = 256;

/// Bytes per ring slot as seen by the DMA engine
pub const WORD_BYTES: usize = 2;
