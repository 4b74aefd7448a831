//! DMA-driven SPI Transmit Engine
//!
//! A `no_std`, `no_alloc` transmit path for pushing 16-bit command frames to a
//! DRV832x gate driver over SPI, with the DMA engine doing the byte moving.
//!
//! # Architecture
//!
//! 1. **Ring** (internal): fixed circular store of outgoing words, one
//!    producer (the foreground) and one consumer (the completion interrupt)
//! 2. **Engine** ([`driver::tx`]): chunks the ring into contiguous bursts,
//!    arms them, and retires them on completion
//! 3. **HAL** ([`hal`]): [`SpiPeripheral`] and [`DmaChannel`] traits, with
//!    register-backed STM32H5 implementations
//! 4. **Device** ([`device`]): DRV832x command frame encoding
//!
//! A burst never wraps around the end of the ring. Data that does is sent
//! as a second burst once the first one completes.
//!
//! # Features
//!
//! - `stm32h5` (default): Register-backed SPI and GPDMA adapters
//! - `defmt`: Enable defmt formatting and logging
//! - `log`: Enable `log` facade logging
//!
//! # Example
//!
//! ```ignore
//! use ph_spi_dma_tx::{SpiTx, SpiTxConfig};
//! use ph_spi_dma_tx::device::drv832x::{Command, Register};
//! use ph_spi_dma_tx::hal::{GpdmaChannel, Spi};
//! use ph_spi_dma_tx::unsafe_registers::GPDMA1_BASE;
//!
//! ph_spi_dma_tx::spi_tx_static!(TX, Spi::spi5(), GpdmaChannel::new(GPDMA1_BASE, 0, SPI5_TX_REQ));
//!
//! TX.init(&SpiTxConfig::new()).unwrap();
//!
//! TX.write(&[
//!     Command::write(Register::DriverControl, 0x000).to_word(),
//!     Command::write(Register::CsaControl, 0x283).to_word(),
//! ])
//! .ok();
//!
//! #[interrupt]
//! fn GPDMA1_CH0() {
//!     TX.on_dma_completion();
//! }
//! ```
//!
//! # Memory Requirements
//!
//! The default ring holds 256 slots of 2 bytes (512 bytes) and must live in
//! memory the DMA engine can read.

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; Cargo.toml mirrors them for workspace tooling.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]

// =============================================================================
// Modules
// =============================================================================

pub mod device;
pub mod driver;
pub mod hal;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{BaudDivider, SpiTxConfig};
pub use driver::error::{ConfigError, ConfigResult, Error, Result, TxError, TxResult};
pub use driver::state::{TransferSession, TxState};
pub use driver::tx::SpiTx;
pub use hal::{DmaChannel, DmaDescriptor, SpiPeripheral};

/// Low-level register accessors for advanced use.
///
/// These are intentionally separated from the primary facade. Most users should
/// prefer the engine API instead of touching registers directly.
///
/// # Safety
///
/// Direct register access bypasses engine invariants. Reconfiguring the SPI or
/// the DMA channel while a burst is in flight corrupts the transfer.
#[cfg(feature = "stm32h5")]
pub mod unsafe_registers {
    pub use crate::internal::register::gpdma::GpdmaChannelRegs;
    pub use crate::internal::register::spi::SpiRegs;
    pub use crate::internal::register::{GPDMA1_BASE, GPDMA2_BASE, SPI5_BASE};
}

/// Shared engine constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on engine types.
pub mod constants {
    pub use crate::internal::constants::{
        // Frame format
        COMMAND_BITS,
        DATA_BITS,
        DATA_MASK,
        // Timing
        DEFAULT_BLOCKING_TIMEOUT_US,
        DEFAULT_KERNEL_CLOCK_HZ,
        DEFAULT_MID_FRAME_IDLE,
        // Ring sizing
        DEFAULT_RING_SLOTS,
        DEFAULT_SS_SETUP_IDLE,
        FRAME_BITS,
        MAX_IDLE_CYCLES,
        MAX_RING_SLOTS,
        MIN_DESELECT_NS,
        MIN_PULSED_MID_FRAME_IDLE,
        MIN_RING_SLOTS,
        WORD_BYTES,
    };
}

// =============================================================================
// Macro Helpers
// =============================================================================

/// Declare a static transmit engine over the STM32H5 SPI and GPDMA adapters.
///
/// The ring is read by the DMA engine, so it must not move; a `static` pins
/// it for the lifetime of the program.
///
/// # Examples
///
/// ```ignore
/// ph_spi_dma_tx::spi_tx_static!(TX, Spi::spi5(), GpdmaChannel::new(GPDMA1_BASE, 0, 42));
/// ph_spi_dma_tx::spi_tx_static!(SMALL_TX, Spi::new(base), dma, 64);
///
/// TX.init(&SpiTxConfig::new()).unwrap();
/// ```
#[cfg(feature = "stm32h5")]
#[macro_export]
macro_rules! spi_tx_static {
    ($name:ident, $spi:expr, $dma:expr) => {
        $crate::spi_tx_static!($name, $spi, $dma, $crate::constants::DEFAULT_RING_SLOTS);
    };
    ($name:ident, $spi:expr, $dma:expr, $slots:expr) => {
        static $name: $crate::SpiTx<$crate::hal::Spi, $crate::hal::GpdmaChannel, { $slots }> =
            $crate::SpiTx::new($spi, $dma);
    };
}
